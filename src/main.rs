//! Wave Defender entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use wave_defender::Settings;
    use wave_defender::platform::InputState;
    use wave_defender::renderer::{RenderState, Starfield, build_scene};
    use wave_defender::sim::{GameEvent, GamePhase, GameState, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: InputState,
        settings: Settings,
        stars: Starfield,
        /// A frame callback is pending
        running: bool,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(width: f32, height: f32, settings: Settings, seed: u64) -> Self {
            Self {
                state: GameState::new(width, height),
                render_state: None,
                input: InputState::new(),
                stars: Starfield::new(seed, settings.star_count()),
                settings,
                running: false,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// Run one simulation tick from the current key state
        fn update(&mut self, time: f64) {
            let input = self.input.tick_input(&self.settings.bindings);
            tick(&mut self.state, &input);

            for event in &self.state.events {
                match event {
                    GameEvent::Invaded => log::info!("The wave reached the ground"),
                    GameEvent::PlayerHit { lives } => log::info!("Ship hit, {} lives left", lives),
                    _ => {}
                }
            }

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            let oldest_time = self.frame_times[self.frame_index];
            if oldest_time > 0.0 {
                let elapsed = time - oldest_time;
                if elapsed > 0.0 {
                    self.fps = (60000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self, time: f64) {
            let vertices = build_scene(&self.state, &self.stars, &self.settings, time);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
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

        /// Update HUD text and overlay screens
        fn update_hud(&self) {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let hud = self.state.hud();

            set_text(&document, "level-display", &hud.level.to_string());
            set_text(&document, "score-display", &hud.score.to_string());
            set_text(&document, "lives-display", &hud.lives.to_string());
            set_text(&document, "enemies-display", &hud.enemies_remaining.to_string());
            if self.settings.show_fps {
                set_text(&document, "fps-display", &self.fps.to_string());
            }

            set_visible(&document, "start-screen", hud.phase == GamePhase::Ready);
            set_visible(
                &document,
                "level-complete",
                hud.phase == GamePhase::LevelComplete,
            );
            set_visible(&document, "game-over", hud.phase == GamePhase::GameOver);
            set_visible(
                &document,
                "all-complete",
                hud.phase == GamePhase::AllLevelsComplete,
            );

            match hud.phase {
                GamePhase::LevelComplete => {
                    set_text(&document, "level-score", &hud.score.to_string())
                }
                GamePhase::GameOver => set_text(&document, "final-score", &hud.score.to_string()),
                GamePhase::AllLevelsComplete => {
                    set_text(&document, "all-complete-score", &hud.score.to_string())
                }
                _ => {}
            }
        }
    }

    fn set_text(document: &Document, id: &str, text: &str) {
        if let Some(el) = document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    fn set_visible(document: &Document, id: &str, visible: bool) {
        if let Some(el) = document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let display = if visible { "flex" } else { "none" };
            let _ = el.style().set_property("display", display);
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Wave Defender starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // The canvas width/height attributes define the playfield
        let width = canvas.width();
        let height = canvas.height();

        let settings = match canvas.get_attribute("data-settings") {
            Some(json) => Settings::from_json(&json).unwrap_or_else(|e| {
                log::warn!("Invalid settings ({}), using defaults", e);
                Settings::default()
            }),
            None => Settings::default(),
        };
        log::info!("Quality preset: {}", settings.quality.as_str());

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(
            width as f32,
            height as f32,
            settings,
            seed,
        )));

        log::info!("Playfield {}x{}", width, height);

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

        let render_state =
            RenderState::new(surface, &adapter, width, height, (width as f32, height as f32))
                .await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_buttons(game.clone());

        // Title screen: draw one frame, then wait for the start button
        {
            let mut g = game.borrow_mut();
            g.render(0.0);
            g.update_hud();
        }

        log::info!("Wave Defender ready!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                // Keep arrows/space from scrolling the page
                if g.settings.bindings.action_for(&key).is_some() {
                    event.prevent_default();
                }
                g.input.set_key(&key, true);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.set_key(&event.key(), false);
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Window blur: keyup events are lost while unfocused
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                game.borrow_mut().input.clear();
                log::debug!("Input cleared (window blur)");
            });
            let _ = window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Wire a button to a state action, then resume the frame loop
    fn on_click(document: &Document, id: &str, game: Rc<RefCell<Game>>, action: fn(&mut GameState)) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("Missing button #{}", id);
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            {
                let mut g = game.borrow_mut();
                action(&mut g.state);
                g.input.clear();
                g.update_hud();
            }
            start_loop(game.clone());
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        on_click(&document, "start-btn", game.clone(), GameState::start);
        on_click(
            &document,
            "next-level-btn",
            game.clone(),
            GameState::continue_to_next_level,
        );
        on_click(&document, "restart-btn", game.clone(), GameState::restart);
        on_click(&document, "play-again-btn", game, GameState::restart);
    }

    /// Schedule frames unless a loop is already running or nothing is playing
    fn start_loop(game: Rc<RefCell<Game>>) {
        {
            let mut g = game.borrow_mut();
            if g.running || g.state.phase != GamePhase::Playing {
                return;
            }
            g.running = true;
        }
        request_animation_frame(game);
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let keep_running = {
            let mut g = game.borrow_mut();

            g.update(time);
            g.render(time);
            g.update_hud();

            // Terminal phases end the loop; a button resumes it
            let playing = g.state.phase == GamePhase::Playing;
            g.running = playing;
            playing
        };

        if keep_running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Wave Defender (native) starting...");
    log::info!("Native mode has no window - run with `trunk serve` for the web version");

    // Headless demo: hold fire and sweep across the wave until the run ends
    demo_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn demo_run() {
    use wave_defender::consts::{DEFAULT_CANVAS_HEIGHT, DEFAULT_CANVAS_WIDTH};
    use wave_defender::sim::{GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new(DEFAULT_CANVAS_WIDTH, DEFAULT_CANVAS_HEIGHT);
    state.start();

    let mut moving_right = false;
    let mut ticks = 0u64;
    loop {
        // Bounce the ship between the screen edges
        if state.player.pos.x <= 0.0 {
            moving_right = true;
        } else if state.player.pos.x + state.player.size.x >= state.width {
            moving_right = false;
        }
        let input = TickInput {
            left: !moving_right,
            right: moving_right,
            fire: true,
            ..Default::default()
        };
        tick(&mut state, &input);
        ticks += 1;

        match state.phase {
            GamePhase::Playing => {}
            GamePhase::LevelComplete => state.continue_to_next_level(),
            _ => break,
        }
    }

    println!(
        "Demo finished after {} ticks: {:?} on level {}, score {}, lives {}",
        ticks, state.phase, state.level, state.score, state.lives
    );
}
