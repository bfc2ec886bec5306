//! Server-only state: the dataset is read from disk on first use and kept for the process lifetime.

use once_cell::sync::OnceCell;
use tracing::{error, info};

use crate::config::DashboardConfig;
use crate::dataset::{Dataset, DatasetError};

static DATASET: OnceCell<Dataset> = OnceCell::new();

pub(crate) fn shared_dataset() -> Result<&'static Dataset, DatasetError> {
    DATASET.get_or_try_init(|| {
        let config = DashboardConfig::from_env();
        info!(path = %config.dataset_path.display(), "loading FODA dataset");
        Dataset::load(&config.dataset_path)
            .inspect(|dataset| {
                info!(
                    records = dataset.records().len(),
                    ideas = dataset.ideas().len(),
                    "dataset ready"
                );
            })
            .inspect_err(|err| {
                error!(format_error = err.is_format_error(), "dataset load failed: {err}")
            })
    })
}
