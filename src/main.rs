use gymnasia::input::{Button, InputConfig};
use gymnasia::loaders::Asset;
use gymnasia::log::{self, LevelFilter};
use gymnasia::math::Mat4;
use gymnasia::{
    Action, Frame, InputManager, Lighting, Log, Mesh, RenderState, Scene, Settings, Sink,
};

/// Sink writing every draw call to the log
#[derive(Default)]
struct LogSink {
    draws: usize,
}

impl Sink for LogSink {
    fn activate(&mut self) {
        log::trace!("activate");
    }

    fn draw(&mut self, transform: &Mat4, state: RenderState, mesh: &Mesh) {
        self.draws += 1;
        log::trace!(
            "draw {} ({} vertices, {:?}) as {:?} at {:?}",
            mesh.name(),
            mesh.count_vertices(),
            mesh.topology(),
            state,
            transform.w.truncate()
        );
    }

    fn lighting(&mut self, lighting: &Lighting) {
        log::trace!(
            "spotlight: {}, point light: {:?}",
            lighting.spotlight_on,
            lighting.point_light_color
        );
    }
}

/// Scripted input: number of frames and actions held during them
const SCRIPT: &[(u32, &[Action])] = &[
    (30, &[Action::MoveForward]),
    (30, &[Action::MoveForward, Action::TurnLeft]),
    (1, &[Action::Backflip]),
    (70, &[]),
    (1, &[Action::Grip]),
    (10, &[]),
    (1, &[Action::Swing]),
    (180, &[]),
    (1, &[Action::Swing]),
    (10, &[]),
    (1, &[Action::Grip]),
    (10, &[]),
];

fn scripted_actions(frame: u32) -> &'static [Action] {
    let period: u32 = SCRIPT.iter().map(|(frames, _)| frames).sum();
    let mut offset = frame % period;
    for &(frames, actions) in SCRIPT.iter() {
        if offset < frames {
            return actions;
        }
        offset -= frames;
    }
    &[]
}

fn apply(manager: &mut InputManager, config: &InputConfig, held: &[Action]) {
    for (action, binding) in config.bindings.iter() {
        if binding.primary != Button::None {
            manager.set_button(binding.primary, held.contains(action));
        }
    }
}

fn main() {
    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(&path),
        None => Ok(Settings::default()),
    };

    let level = match &settings {
        Ok(settings) if settings.debug => LevelFilter::Debug,
        _ => LevelFilter::Info,
    };
    if let Err(err) = Log::default().level("gymnasia", level).subscribe() {
        eprintln!("{}", err);
    }

    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };
    log::info!("Starting {}", settings.application_name);

    let mut scene = match Scene::load(&settings) {
        Ok(scene) => scene,
        Err(err) => {
            log::error!("Scene could not be loaded: {}", err);
            std::process::exit(1);
        }
    };

    let mut frame = match settings.fixed_duration() {
        Some(delta) => Frame::fixed(delta),
        None => Frame::new(),
    }
    .log_fps(settings.log_fps);

    let mut input_manager = InputManager::new(&settings.input);
    let mut sink = LogSink::default();

    for index in 0..settings.frames {
        frame.next();
        apply(&mut input_manager, &settings.input, scripted_actions(index));
        let input = input_manager.snapshot();
        if input.is_pressed(Action::Exit) {
            break;
        }

        scene.update(&input, frame.delta().as_secs_f32());
        scene.draw(&mut sink);
        input_manager.update();
    }

    let gymnast = scene.bar_gymnast();
    log::info!(
        "Done in {:.2}s: {} draw calls, {} ended at {:?}",
        frame.time().as_secs_f32(),
        sink.draws,
        gymnast.name(),
        gymnast.position()
    );
}
