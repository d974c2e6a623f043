//! Application state shared by all handlers.

use picshelf_core::Config;
use picshelf_db::LedgerRepository;
use picshelf_processing::{ImagePipeline, MediaValidator};
use picshelf_storage::Storage;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
    pub ledger: LedgerRepository,
    pub pipeline: ImagePipeline,
    pub validator: MediaValidator,
}
