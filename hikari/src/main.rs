use hikari::{
    expect,
    film::ImageWriter,
    hikari_info,
    integrators::Whitted,
    scene::{demo, LoadedScene, SceneDescription},
};

use std::{path::Path, sync::Arc};

fn setup_logger() -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}[{}][{}:{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.level(),
                record.target(),
                record.line().unwrap_or(0),
                message
            ))
        })
        // .level(log::LevelFilter::Debug)
        .level(log::LevelFilter::Info)
        // .level(log::LevelFilter::Warn)
        .chain(std::io::stdout())
        .chain(std::fs::File::create("hikari.log")?)
        .apply()?;
    Ok(())
}

fn main() {
    if let Err(why) = setup_logger() {
        panic!("{}", why);
    };

    let LoadedScene {
        scene,
        camera,
        film,
        tracer,
        render,
    } = match std::env::args().nth(1) {
        Some(path) => expect!(
            SceneDescription::load(Path::new(&path)),
            "Failed to load scene"
        ),
        None => {
            hikari_info!("No scene given, rendering the built-in demo");
            expect!(demo(), "Failed to construct the demo scene")
        }
    };

    let image_writer = expect!(
        ImageWriter::from_settings(scene.name(), film),
        "Invalid film settings"
    );
    let scene = Arc::new(scene);
    let mut camera = expect!(
        camera
            .image_writer(image_writer)
            .ray_tracer(Whitted::new(scene, tracer))
            .render_settings(render)
            .build(),
        "Invalid camera"
    );

    expect!(camera.render_image(), "Render failed");
    expect!(camera.write_to_image(), "Failed to write image");
}
