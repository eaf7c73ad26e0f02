use std::path::PathBuf;
use vdwp::engine::config::SurfaceConfig;

pub struct AppConfig {
    pub core_config: SurfaceConfig,
    pub gas_table_path: Option<PathBuf>,
    pub crystals_path: Option<PathBuf>,
}
