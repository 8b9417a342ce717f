//! Spider Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

    use spider_catch::audio::AudioManager;
    use spider_catch::consts::SPAWN_PERIOD_MS;
    use spider_catch::platform::PlatformError;
    use spider_catch::platform::dom::DomScoreboard;
    use spider_catch::renderer::CanvasRenderer;
    use spider_catch::{FrameOutcome, Game, Settings};

    /// Everything one page needs to run the game
    struct App {
        game: Game,
        renderer: CanvasRenderer,
        audio: AudioManager,
        display: DomScoreboard,
        settings: Settings,
        /// `setInterval` handle of the insect spawner
        spawn_timer: Option<i32>,
    }

    fn viewport(window: &Window) -> Vec2 {
        let w = window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let h = window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        Vec2::new(w as f32, h as f32)
    }

    fn session_seed(settings: &Settings) -> u64 {
        settings
            .seed
            .unwrap_or_else(|| js_sys::Date::now() as u64)
    }

    fn find_or_create_canvas(document: &web_sys::Document) -> Result<HtmlCanvasElement, PlatformError> {
        if let Some(el) = document.get_element_by_id("canvas") {
            return el
                .dyn_into()
                .map_err(|_| PlatformError::Missing("canvas"));
        }
        let canvas: HtmlCanvasElement = document
            .create_element("canvas")?
            .dyn_into()
            .map_err(|_| PlatformError::Missing("canvas"))?;
        document
            .body()
            .ok_or(PlatformError::Missing("body"))?
            .append_child(&canvas)?;
        Ok(canvas)
    }

    pub fn run() -> Result<(), PlatformError> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Trace).ok();
        let settings = Settings::load();
        log::set_max_level(settings.log_level.to_level().to_level_filter());

        log::info!("Spider Catch starting...");

        let window = web_sys::window().ok_or(PlatformError::Missing("window"))?;
        let document = window
            .document()
            .ok_or(PlatformError::Missing("document"))?;

        let canvas = find_or_create_canvas(&document)?;
        let size = viewport(&window);
        let seed = session_seed(&settings);

        let renderer = CanvasRenderer::new(canvas, seed)?;
        renderer.resize(size.x as u32, size.y as u32);

        let mut display = DomScoreboard::new(&document);
        let game = Game::new(seed, size);
        game.announce(&mut display);

        let app = Rc::new(RefCell::new(App {
            game,
            renderer,
            audio: AudioManager::new(&settings),
            display,
            settings,
            spawn_timer: None,
        }));

        setup_input_handlers(&window, app.clone())?;
        start_spawner(&window, app.clone())?;

        // Start game loop
        request_animation_frame(app);

        log::info!("Spider Catch running!");
        Ok(())
    }

    fn setup_input_handlers(window: &Window, app: Rc<RefCell<App>>) -> Result<(), PlatformError> {
        // Mouse move
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
                let pos = Vec2::new(event.client_x() as f32, event.client_y() as f32);
                app.borrow_mut().game.set_pointer(pos);
            });
            window.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Touch move - must not be passive so the page doesn't scroll
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                if let Some(touch) = event.touches().get(0) {
                    let pos = Vec2::new(touch.client_x() as f32, touch.client_y() as f32);
                    app.borrow_mut().game.set_pointer(pos);
                }
            });
            let options = AddEventListenerOptions::new();
            options.set_passive(false);
            window.add_event_listener_with_callback_and_add_event_listener_options(
                "touchmove",
                closure.as_ref().unchecked_ref(),
                &options,
            )?;
            closure.forget();
        }

        // Resize
        {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let Some(window) = web_sys::window() else { return };
                let size = viewport(&window);
                let mut a = app.borrow_mut();
                a.renderer.resize(size.x as u32, size.y as u32);
                a.game.resize(size);
            });
            window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        // Click / tap: unlock audio, and start over after game over
        for kind in ["mousedown", "touchstart"] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                let over = {
                    let a = app.borrow();
                    a.audio.resume();
                    a.game.is_over()
                };
                if over {
                    restart(&app);
                }
            });
            window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
            closure.forget();
        }

        Ok(())
    }

    fn start_spawner(window: &Window, app: Rc<RefCell<App>>) -> Result<(), PlatformError> {
        let closure = Closure::<dyn FnMut()>::new({
            let app = app.clone();
            move || app.borrow_mut().game.spawn_insect()
        });
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            SPAWN_PERIOD_MS as i32,
        )?;
        closure.forget();
        app.borrow_mut().spawn_timer = Some(handle);
        Ok(())
    }

    fn stop_spawner(app: &mut App) {
        if let Some(handle) = app.spawn_timer.take() {
            if let Some(window) = web_sys::window() {
                window.clear_interval_with_handle(handle);
            }
        }
    }

    fn restart(app: &Rc<RefCell<App>>) {
        {
            let mut a = app.borrow_mut();
            let seed = session_seed(&a.settings);
            a.game.restart(seed);
            let App { game, display, .. } = &mut *a;
            game.announce(display);
        }

        if let Some(window) = web_sys::window() {
            if let Err(e) = start_spawner(&window, app.clone()) {
                log::error!("Failed to restart spawner: {}", e);
            }
        }
        request_animation_frame(app.clone());
    }

    fn request_animation_frame(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else { return };
        let closure = Closure::once(move |_time: f64| {
            game_loop(app);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(app: Rc<RefCell<App>>) {
        let outcome = {
            let mut a = app.borrow_mut();
            let App {
                game,
                renderer,
                audio,
                display,
                ..
            } = &mut *a;
            game.frame(renderer, audio, display)
        };

        match outcome {
            FrameOutcome::Continue => request_animation_frame(app),
            FrameOutcome::Halt => {
                stop_spawner(&mut app.borrow_mut());
                log::info!("Frame loop stopped - tap to play again");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    if let Err(e) = wasm_game::run() {
        log::error!("Failed to start: {}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use spider_catch::Settings;

    let settings = std::env::args()
        .nth(1)
        .map(|path| Settings::load_file(std::path::Path::new(&path)));

    env_logger::Builder::new()
        .filter_level(
            settings
                .as_ref()
                .and_then(|s| s.as_ref().ok())
                .map(|s| s.log_level)
                .unwrap_or_default()
                .to_level()
                .to_level_filter(),
        )
        .parse_default_env()
        .init();

    let settings = match settings {
        Some(Ok(settings)) => settings,
        Some(Err(e)) => {
            log::warn!("Ignoring bad settings: {}", e);
            Settings::default()
        }
        None => Settings::default(),
    };

    log::info!("Spider Catch (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    let seed = settings.seed.unwrap_or_else(|| {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default()
    });
    autopilot::run(seed);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless session where a simple bot steers the spider
#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use glam::Vec2;

    use spider_catch::platform::headless::{LogAudio, LogScoreboard, NullRenderer};
    use spider_catch::sim::{GameState, InsectKind, SpawnClock};
    use spider_catch::{FrameOutcome, Game};

    const FIELD: Vec2 = Vec2::new(800.0, 600.0);
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Five minutes at 60 fps
    const MAX_FRAMES: u64 = 60 * 60 * 5;
    /// Pixels per frame the bot may move the spider
    const BOT_SPEED: f32 = 9.0;
    /// Height the bot patrols at
    const PATROL_Y: f32 = FIELD.y - 80.0;

    pub fn run(seed: u64) {
        let mut game = Game::new(seed, FIELD);
        let mut renderer = NullRenderer::default();
        let mut audio = LogAudio::default();
        let mut display = LogScoreboard::default();
        let mut clock = SpawnClock::default();
        game.announce(&mut display);

        let mut spider = game.state.avatar.pos;
        let mut frames = 0;
        while frames < MAX_FRAMES {
            for _ in 0..clock.advance(FRAME_MS) {
                game.spawn_insect();
            }

            spider = step_toward(spider, target(&game.state));
            game.set_pointer(spider);

            frames += 1;
            if game.frame(&mut renderer, &mut audio, &mut display) == FrameOutcome::Halt {
                break;
            }
        }

        log::info!(
            "Autopilot finished after {} frames: score {}, lives {}, {} catches, {} celebrations, {} losses{}",
            frames,
            display.score,
            display.lives,
            audio.small_wins,
            audio.big_wins,
            audio.losses,
            renderer
                .last_text
                .map(|t| format!(" ({})", t))
                .unwrap_or_default()
        );
    }

    /// Chase the lowest catchable insect along the patrol line
    fn target(state: &GameState) -> Vec2 {
        state
            .insects
            .iter()
            .filter(|i| i.kind != InsectKind::Enemy && i.pos.y < PATROL_Y)
            .max_by(|a, b| a.pos.y.total_cmp(&b.pos.y))
            .map(|i| Vec2::new(i.pos.x, PATROL_Y))
            .unwrap_or(Vec2::new(state.field.x / 2.0, PATROL_Y))
    }

    fn step_toward(from: Vec2, to: Vec2) -> Vec2 {
        let delta = to - from;
        if delta.length() <= BOT_SPEED {
            to
        } else {
            from + delta.normalize() * BOT_SPEED
        }
    }
}
