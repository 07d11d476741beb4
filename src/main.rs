use clap::Parser;
use log::info;
use nalgebra::Vector3;
use std::{error::Error, time::Instant};
use whitted::{
    config::{Args, RenderConfig},
    demo::{self, DemoLights},
    logger::init_logger,
    Camera, FrameBuffer, Projection, RayTracer, Scene,
};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logger(args.log_level.into());
    let config = args.validate()?;
    info!(
        "{}x{} {:?}, depth {}, scene {:?}",
        config.width, config.height, config.projection, config.depth, config.scene
    );

    let (scene, lights) = demo::build(config.scene);
    let mut tracer = RayTracer::new(camera(&config));
    tracer.set_recursion_depth(config.depth);
    tracer.set_default_color(demo::light_blue());
    let mut frame_buffer = FrameBuffer::new(config.width, config.height);

    if config.window {
        return run_window(&config, tracer, scene, lights, frame_buffer);
    }

    draw_frame(&tracer, &scene, &mut frame_buffer);
    if let Some(path) = &config.output {
        frame_buffer.save_png(path)?;
        info!("wrote {}", path.display());
    }
    Ok(())
}

fn camera(config: &RenderConfig) -> Camera {
    let mut camera = Camera::new(config.width, config.height);
    camera.set_frame(Vector3::zeros(), Vector3::new(0.0, 0.0, -1.0), Vector3::new(0.0, 1.0, 0.0));
    match config.projection {
        Projection::Perspective { fov_degrees } => camera.perspective(fov_degrees),
        Projection::Orthographic { plane_height } => camera.orthographic(plane_height),
    }
    camera
}

fn draw_frame(tracer: &RayTracer, scene: &Scene, frame_buffer: &mut FrameBuffer) {
    let start = Instant::now();
    tracer.render(scene, frame_buffer);
    info!("render time: {:.3} sec", start.elapsed().as_secs_f64());
}

#[cfg(not(feature = "window"))]
fn run_window(
    _config: &RenderConfig,
    _tracer: RayTracer,
    _scene: Scene,
    _lights: DemoLights,
    _frame_buffer: FrameBuffer,
) -> Result<(), Box<dyn Error>> {
    Err(whitted::Error::WindowUnavailable.into())
}

#[cfg(feature = "window")]
fn run_window(
    config: &RenderConfig,
    mut tracer: RayTracer,
    mut scene: Scene,
    lights: DemoLights,
    mut frame_buffer: FrameBuffer,
) -> Result<(), Box<dyn Error>> {
    use log::debug;
    use sdl2::{event::Event, event::WindowEvent, keyboard::Keycode, pixels::PixelFormatEnum};
    use whitted::{scene::LightId, Error as TraceError};

    let sdl2_context = sdl2::init().map_err(TraceError::Window)?;
    let mut canvas = sdl2_context
        .video()
        .map_err(TraceError::Window)?
        .window("Ray Trace", config.width as u32, config.height as u32)
        .position_centered()
        .resizable()
        .build()?
        .into_canvas()
        .build()?;
    let texture_creator = canvas.texture_creator();
    let mut texture = texture_creator.create_texture_streaming(
        PixelFormatEnum::RGBA32,
        frame_buffer.width() as u32,
        frame_buffer.height() as u32,
    )?;
    let mut events = sdl2_context.event_pump().map_err(TraceError::Window)?;

    let toggle = |scene: &mut Scene, id: LightId, name: &str| {
        if let Some(light) = scene.light_mut(id) {
            light.toggle();
            debug!("{} light {}", name, if light.enabled() { "on" } else { "off" });
        }
    };

    let mut dirty = true;
    'main: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => break 'main,
                Event::KeyDown {
                    keycode: Some(key), ..
                } => {
                    match key {
                        Keycode::Num0 => tracer.set_recursion_depth(0),
                        Keycode::Num1 => tracer.set_recursion_depth(1),
                        Keycode::Num2 => tracer.set_recursion_depth(2),
                        Keycode::Num3 => tracer.set_recursion_depth(3),
                        Keycode::Num4 => tracer.set_recursion_depth(4),
                        Keycode::A => toggle(&mut scene, lights.ambient, "ambient"),
                        Keycode::P => toggle(&mut scene, lights.positional, "positional"),
                        Keycode::D => toggle(&mut scene, lights.directional, "directional"),
                        Keycode::S => toggle(&mut scene, lights.spot, "spot"),
                        other => {
                            debug!("{} key pressed", other);
                            continue;
                        }
                    }
                    dirty = true;
                }
                Event::Window {
                    win_event: WindowEvent::Resized(width, height),
                    ..
                } if width > 0 && height > 0 => {
                    frame_buffer.resize(width as usize, height as usize);
                    tracer.camera.resize(width as usize, height as usize);
                    texture = texture_creator.create_texture_streaming(
                        PixelFormatEnum::RGBA32,
                        width as u32,
                        height as u32,
                    )?;
                    dirty = true;
                }
                _ => continue,
            }
        }

        if dirty {
            debug!("depth {}", tracer.recursion_depth());
            draw_frame(&tracer, &scene, &mut frame_buffer);
            texture.update(None, frame_buffer.pixel_data(), frame_buffer.width() * 4)?;
            canvas.copy(&texture, None, None).map_err(TraceError::Window)?;
            canvas.present();
            dirty = false;
        }
        std::thread::sleep(std::time::Duration::from_millis(16));
    }
    Ok(())
}
