mod drivers;

use embassy_executor::Spawner;
use embassy_futures::join::join;
use embassy_futures::select::select;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use sunshine_common::*;
use sunshine_core::{SyncRelay, WatchFaceEngine, face_task, relay_task};
use sunshine_graphics::{EgCanvas, Framebuffer, PngAssetLoader};

use drivers::{SimAssetSource, SimHost, host_script, load_config, phone_script};

const SCREEN_SIZE: u32 = 320;

static BROADCASTS: LocalBroadcastManager<CriticalSectionRawMutex> = LocalBroadcastManager::new();
static DATA_EVENTS: DataEventChannel<CriticalSectionRawMutex> = DataEventChannel::new();
static HOST_EVENTS: HostEventChannel<CriticalSectionRawMutex> = HostEventChannel::new();

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        error!("Simulator error: {:?}", e);
        std::process::exit(1);
    }
}

async fn run() -> SystemResult<()> {
    let config = load_config()?;
    let mut loader = PngAssetLoader::new(SimAssetSource::from_env());
    let engine = WatchFaceEngine::create(
        SimHost::new(SCREEN_SIZE, SCREEN_SIZE),
        config,
        &mut loader,
        &BROADCASTS,
    )?;

    let mut framebuffer = Framebuffer::new(SCREEN_SIZE, SCREEN_SIZE);
    let mut canvas = EgCanvas::new(&mut framebuffer);

    let face = join(
        face_task(engine, HOST_EVENTS.receiver(), &mut canvas),
        host_script(HOST_EVENTS.sender()),
    );
    let phone = join(
        relay_task(SyncRelay::new(&BROADCASTS), DATA_EVENTS.receiver()),
        phone_script(SyncRelay::new(&BROADCASTS), DATA_EVENTS.sender()),
    );
    select(face, phone).await;

    // 可选导出最后一帧
    if let Some(path) = std::env::var_os("SUNSHINE_FRAME") {
        match framebuffer.save_png(&path) {
            Ok(()) => info!("Last frame saved to {:?}", path),
            Err(e) => warn!("Failed to save frame: {}", e),
        }
    }

    Ok(())
}
