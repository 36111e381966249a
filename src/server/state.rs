use axum::extract::FromRef;

use crate::library::LibraryService;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;

pub type GuardedLibraryService = Arc<dyn LibraryService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub library: GuardedLibraryService,
}

impl ServerState {
    pub fn new(config: ServerConfig, library: GuardedLibraryService) -> Self {
        ServerState {
            config,
            start_time: Instant::now(),
            library,
        }
    }
}

impl FromRef<ServerState> for GuardedLibraryService {
    fn from_ref(input: &ServerState) -> Self {
        input.library.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
