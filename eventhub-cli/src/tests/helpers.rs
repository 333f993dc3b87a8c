//! Test helpers for writing snapshots and stubbing the recommender.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use eventhub_core::{
    Diagnostics, RecommendError, RecommendationRequest, RecommendationResponse, Recommender,
};
use std::fs;
use tempfile::TempDir;

/// Snapshot exported on 2025-06-01 where `user-1` follows the festival
/// organizer and lives in Bogotá.
pub(super) const SNAPSHOT_JSON: &str = r#"{
    "events": [
        {
            "id": "concert",
            "organizador_id": "org-venue",
            "ubicacion": "Bogotá, Colombia",
            "fecha": "2025-06-06",
            "estado": "publicado",
            "tipos_entrada": [{ "nombre": "General", "cantidad_disponible": 200 }]
        },
        {
            "id": "rehearsal",
            "organizador_id": "org-festival",
            "fecha": "2025-06-03",
            "estado": "borrador"
        },
        {
            "id": "festival",
            "organizador_id": "org-festival",
            "ubicacion": "Madrid, España",
            "fecha": "2025-06-26",
            "tipos_entrada": [{ "nombre": "General", "cantidad_disponible": 10 }]
        }
    ],
    "follows": [{ "usuario_id": "user-1", "organizador_id": "org-festival" }],
    "profiles": [{ "usuario_id": "user-1", "ubicacion": "Bogotá, Colombia" }]
}"#;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent directories");
    }
    fs::write(path, contents).expect("write file");
}

/// Temporary directory holding the inputs for a single test.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }

    pub(super) fn write_snapshot(&self) -> Utf8PathBuf {
        let path = self.path("snapshot.json");
        write_utf8(&path, SNAPSHOT_JSON.as_bytes());
        path
    }
}

pub(super) fn args_for(snapshot: &Utf8Path, user: &str) -> RecommendArgs {
    RecommendArgs {
        snapshot: Some(snapshot.to_path_buf()),
        user: Some(user.to_owned()),
        now: Some("2025-06-01".to_owned()),
        ..RecommendArgs::default()
    }
}

struct StubRecommender {
    response: RecommendationResponse,
}

impl Recommender for StubRecommender {
    fn recommend(
        &self,
        _request: &RecommendationRequest,
    ) -> Result<RecommendationResponse, RecommendError> {
        Ok(self.response.clone())
    }
}

/// Builder returning a recommender with a canned, empty response.
#[derive(Debug, Default)]
pub(super) struct StubRecommenderBuilder {
    pub(super) candidates_received: usize,
}

impl RecommenderBuilder for StubRecommenderBuilder {
    fn build(&self, _config: &RecommendConfig) -> Result<Box<dyn Recommender>, CliError> {
        Ok(Box::new(StubRecommender {
            response: RecommendationResponse {
                events: Vec::new(),
                diagnostics: Diagnostics {
                    candidates_received: self.candidates_received,
                    ..Diagnostics::default()
                },
            },
        }))
    }
}
