//! Purin Platformer entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use purin_platformer::platform::{FrameClock, KeyboardState};
    use purin_platformer::renderer::RenderState;
    use purin_platformer::scene::DrawList;
    use purin_platformer::{Game, GameEvent, Settings};

    /// Browser app: the game plus everything that feeds and displays it
    struct App {
        game: Game,
        render_state: Option<RenderState>,
        keyboard: KeyboardState,
        clock: FrameClock,
        running: bool,
    }

    impl App {
        fn new(game: Game) -> Self {
            let clock = FrameClock::new(game.settings.target_fps);
            Self {
                game,
                render_state: None,
                keyboard: KeyboardState::new(),
                clock,
                running: true,
            }
        }

        /// One animation-frame callback; skipped if it arrived early
        fn frame(&mut self, time: f64) {
            let Some(dt) = self.clock.tick(time) else {
                return;
            };

            let input = self.keyboard.snapshot();
            let frame = self.game.step(&input, dt);
            for event in &frame.events {
                match event {
                    GameEvent::Quit => log::info!("Quit requested"),
                    other => log::debug!("{:?}", other),
                }
            }
            self.render(&frame.draw);

            if self.game.finished() {
                self.running = false;
                log::info!("Stopped after {} frames", self.game.world.frame);
            }
        }

        /// Render the current frame
        fn render(&mut self, list: &DrawList) {
            let quality = self.game.settings.quality;
            if let Some(ref mut render_state) = self.render_state {
                match render_state.draw(list, quality) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Purin Platformer starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        // Hide loading indicator
        if let Some(loading) = document.get_element_by_id("loading") {
            let _ = loading.set_attribute("class", "hidden");
        }

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Set canvas size
        let dpr = window.device_pixel_ratio();
        let width = (canvas.client_width() as f64 * dpr) as u32;
        let height = (canvas.client_height() as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        // Initialize game
        let seed = js_sys::Date::now() as u64;
        let settings = Settings::load();
        // Write back so the stored copy carries any newly added fields
        settings.save();
        let game = match Game::new(seed, settings) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Failed to load level: {}", e);
                return;
            }
        };
        let app = Rc::new(RefCell::new(App::new(game)));

        log::info!("Game initialized with seed: {}", seed);

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        app.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(app.clone());
        setup_focus_handlers(app.clone());

        // Start game loop
        request_animation_frame(app);

        log::info!("Purin Platformer running!");
    }

    fn setup_input_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();

        // Key presses
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().keyboard.key_down(&event.key()).is_some() {
                    // Keep arrows and space from scrolling the page
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key releases
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if app.borrow_mut().keyboard.key_up(&event.key()).is_some() {
                    event.prevent_default();
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Releases for keys held while the page loses focus never arrive
    fn setup_focus_handlers(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        // Visibility change (tab switch, minimize)
        {
            let app = app.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut a = app.borrow_mut();
                    a.keyboard.release_all();
                    a.clock.reset();
                    log::info!("Tab hidden; keys released");
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                app.borrow_mut().keyboard.release_all();
                log::debug!("Window blurred; keys released");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(app, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>, time: f64) {
        {
            let mut a = app.borrow_mut();
            a.frame(time);
            if !a.running {
                return;
            }
        }

        request_animation_frame(app);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
mod headless {
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use purin_platformer::platform::{script, FrameLimiter, KeyboardState};
    use purin_platformer::renderer::tessellate;
    use purin_platformer::{Game, GameEvent, QualityPreset, Settings};

    /// Run the meadow level without a display, driven by a scripted player
    #[derive(Debug, Parser)]
    #[command(name = "purin-platformer", version, about)]
    pub struct Args {
        /// Number of frames to simulate before quitting
        #[arg(long, default_value_t = 600)]
        pub frames: u64,
        /// Seed for cosmetic randomness (blink timing)
        #[arg(long, default_value_t = 1)]
        pub seed: u64,
        /// Pace frames at the target rate instead of running flat out
        #[arg(long)]
        pub realtime: bool,
        /// JSON settings file
        #[arg(long, value_name = "FILE")]
        pub settings: Option<PathBuf>,
        /// Override the quality preset (low, medium, high)
        #[arg(long, value_parser = parse_quality)]
        pub quality: Option<QualityPreset>,
    }

    fn parse_quality(s: &str) -> Result<QualityPreset, String> {
        QualityPreset::from_str(s).ok_or_else(|| format!("unknown quality preset '{}'", s))
    }

    fn load_settings(path: Option<&PathBuf>) -> Result<Settings, String> {
        let Some(path) = path else {
            return Ok(Settings::load());
        };
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        Settings::from_json(&json).map_err(|e| format!("invalid settings in {}: {}", path.display(), e))
    }

    pub fn run(args: Args) -> ExitCode {
        let mut settings = match load_settings(args.settings.as_ref()) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}", e);
                return ExitCode::from(2);
            }
        };
        if let Some(quality) = args.quality {
            settings.quality = quality;
        }
        let fps = settings.target_fps;
        let nominal_dt = settings.frame_interval();

        let mut game = match Game::new(args.seed, settings) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Failed to load level: {}", e);
                return ExitCode::FAILURE;
            }
        };
        log::info!(
            "Simulating {} frames (seed {}, {} fps, {} quality{})",
            args.frames,
            args.seed,
            fps,
            game.settings.quality.as_str(),
            if args.realtime { ", realtime" } else { "" }
        );

        let mut keyboard = KeyboardState::new();
        let mut limiter = args.realtime.then(|| FrameLimiter::new(fps));

        for frame in 0..args.frames {
            script::apply(script::DEMO, frame, &mut keyboard);
            if frame + 1 == args.frames {
                keyboard.key_down("Escape");
            }

            let dt = limiter.as_mut().map_or(nominal_dt, FrameLimiter::wait);
            let input = keyboard.snapshot();
            let out = game.step(&input, dt);

            let vertices = tessellate(&out.draw, game.settings.quality.circle_segments());
            log::trace!(
                "Frame {}: {} draw commands, {} vertices",
                game.world.frame,
                out.draw.len(),
                vertices.len()
            );
            for event in &out.events {
                match event {
                    GameEvent::Quit => log::info!("Quit after frame {}", game.world.frame),
                    other => log::info!("Frame {}: {:?}", game.world.frame, other),
                }
            }
            if game.finished() {
                break;
            }
        }

        let world = &game.world;
        log::info!(
            "Player at ({:.1}, {:.1}), {} of {} blocks used, {} enemies left, camera at {:.1}",
            world.player.rect.x,
            world.player.rect.y,
            world.used_blocks(),
            world.blocks.len(),
            world.enemies.len(),
            world.camera.x
        );
        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Purin Platformer (native) starting...");
    log::info!("Native mode runs headless - run with `trunk serve` for the playable web version");

    headless::run(headless::Args::parse())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
