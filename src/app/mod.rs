use ggez::{
    event::{EventHandler, ErrorOrigin},
    graphics::{Canvas, DrawMode, DrawParam, Mesh, MeshBuilder},
    input::keyboard::KeyInput,
    Context,
};
use log::{debug, error, info};
use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Config,
    error::{Error, ErrorConversion, Result},
    game::{GameState, Phase, Signal, StepOutcome},
    rendering::{self, Palette, RenderConfig, Scene},
};
use control::Control;
use message::Message;

mod control;
mod keyboard_control;
mod message;

/// Owns the game state and drives it from the ggez event loop
pub struct App {
    state: GameState,
    control: Control,
    rng: StdRng,

    palette: Palette,
    render: RenderConfig,
}

impl App {
    pub fn new(config: &Config) -> Self {
        debug!("apple seed: {}", config.seed);
        Self {
            state: GameState::new(config.grid, config.start_mode),
            control: Control::new(config.tick),
            rng: StdRng::seed_from_u64(config.seed),

            palette: Palette::default(),
            render: config.render,
        }
    }

    fn draw_scene(&self, scene: &Scene, canvas: &mut Canvas, ctx: &Context) -> Result {
        let (width, height) = ctx.gfx.drawable_size();

        if !scene.quads.is_empty() {
            let builder = &mut MeshBuilder::new();
            for quad in &scene.quads {
                builder
                    .rectangle(DrawMode::fill(), quad.rect.to_screen(width, height), quad.color)
                    .map_err(Error::from)
                    .with_trace_step("App::draw_scene")?;
            }
            canvas.draw(&Mesh::from_data(ctx, builder.build()), DrawParam::default());
        }

        if let Some(notice) = scene.notice {
            Message::notice(notice).get_drawable(ctx).draw(canvas);
        }

        Ok(())
    }
}

impl EventHandler<Error> for App {
    fn update(&mut self, _ctx: &mut Context) -> Result {
        if self.state.is_playing() && self.control.can_update() {
            if let StepOutcome::Crashed(_) = self.state.step(&mut self.rng) {
                info!("survived {} ticks", self.control.game_frame_num());
            }
        }
        Ok(())
    }

    fn draw(&mut self, ctx: &mut Context) -> Result {
        let scene = rendering::scene(&self.state, &self.palette, self.render);

        let mut canvas = Canvas::from_frame(ctx, scene.background);
        self.draw_scene(&scene, &mut canvas, ctx)?;
        canvas
            .finish(ctx)
            .map_err(Error::from)
            .with_trace_step("App::draw")
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, repeated: bool) -> Result {
        if repeated {
            return Ok(());
        }
        let Some(key) = input.keycode.and_then(keyboard_control::translate) else {
            return Ok(());
        };

        let was_playing = self.state.is_playing();
        if self.state.handle_key(key) == Signal::Exit {
            ctx.request_quit();
        } else if !was_playing && self.state.phase == Phase::Playing {
            self.control.play();
        }
        Ok(())
    }

    fn quit_event(&mut self, _ctx: &mut Context) -> Result<bool> {
        // escape on the game over screen ends up here too
        info!("Exiting");
        Ok(false)
    }

    fn on_error(&mut self, _ctx: &mut Context, origin: ErrorOrigin, e: Error) -> bool {
        error!("{:?} failed: {}", origin, e);
        true
    }
}
