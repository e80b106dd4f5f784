use std::path::PathBuf;

use env_logger::Env;

mod scene;

use scene::{Scene, SceneError};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

const DEFAULT_SCENE: &str = "demos/basic.toml";

fn main() -> Result<(), SceneError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENE));
    log::info!(target: "slideshow", "loading scene {}", path.display());

    let scene = Scene::load(&path)?;
    let session = scene.run()?;
    log::info!(target: "slideshow", "finished: {}", session.summary());
    Ok(())
}
