//! Simon - application builder and runner

use std::io::stdout;

use color_eyre::eyre::{eyre, Result as EyreResult, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
};
use rtrb::RingBuffer;
use tracing::{error, info, warn};

use simon_says::{
    config::GameConfig,
    game::{Game, Snapshot},
    synth::{FrameClock, PolySynth, SynthMessage},
    tone::{SilentEmitter, SynthEmitter, ToneEmitter},
    voices, MAX_BLOCK_SIZE,
};

use super::ui::UiApp;

/// Capacity of the game-to-audio trigger queue
const MESSAGE_QUEUE: usize = 64;
/// Capacity of the game-to-UI snapshot queue
const SNAPSHOT_QUEUE: usize = 64;

/// Main application builder
pub struct Simon {
    config: GameConfig,
}

impl Simon {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }

    /// Replace the game settings
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Run the application until the player quits
    pub fn run(self) -> EyreResult<()> {
        // The stream stops when dropped, so it lives until the UI exits
        let (emitter, _stream): (Box<dyn ToneEmitter>, Option<cpal::Stream>) =
            match open_audio(&self.config) {
                Ok((emitter, stream)) => (Box::new(emitter), Some(stream)),
                Err(err) => {
                    warn!(error = %err, "no audio output, playing silently");
                    (Box::new(SilentEmitter::new()), None)
                }
            };

        let mut game =
            Game::from_entropy(self.config, emitter).wrap_err("invalid game configuration")?;

        let (state_tx, state_rx) = RingBuffer::<Snapshot>::new(SNAPSHOT_QUEUE);
        let initial = game.snapshot();
        game.subscribe(state_tx);

        let mut terminal = ratatui::init();
        execute!(stdout(), EnableMouseCapture)?;

        let result = UiApp::new(game, state_rx, initial).run(&mut terminal);

        let _ = execute!(stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }
}

impl Default for Simon {
    fn default() -> Self {
        Self::new()
    }
}

/// Open the default output device and start a synth stream on it.
fn open_audio(config: &GameConfig) -> EyreResult<(SynthEmitter, cpal::Stream)> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let stream_config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = stream_config.sample_rate().0 as f32;
    let channels = stream_config.channels() as usize;
    info!(sample_rate, channels, "audio output opened");

    let clock = FrameClock::new(sample_rate);
    let (tx, rx) = RingBuffer::<SynthMessage>::new(MESSAGE_QUEUE);
    let mut synth = PolySynth::new(voices::tone, config.voices, rx, clock.clone(), config.volume);
    let mut render_buf = vec![0.0f32; MAX_BLOCK_SIZE];

    let stream = device.build_output_stream(
        &stream_config.into(),
        move |data: &mut [f32], _| {
            let total_frames = data.len() / channels;
            let mut frames_written = 0;

            while frames_written < total_frames {
                let frames_to_render = (total_frames - frames_written).min(MAX_BLOCK_SIZE);
                let block = &mut render_buf[..frames_to_render];
                synth.render_block(block);

                // Copy to output (mono to all channels)
                let out_off = frames_written * channels;
                for (i, &s) in block.iter().enumerate() {
                    for ch in 0..channels {
                        data[out_off + i * channels + ch] = s;
                    }
                }

                frames_written += frames_to_render;
            }
        },
        |err| error!(error = %err, "audio stream error"),
        None,
    )?;

    stream.play()?;

    let emitter = SynthEmitter::new(tx, clock, config.tempo_bpm, config.velocity);
    Ok((emitter, stream))
}
