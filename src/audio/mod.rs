//! Procedural audio: fire-and-forget effect tones plus the looping
//! background melody.
//!
//! The output device is opened once at startup. If that fails, the whole
//! engine degrades to silent no-ops for the life of the process; the
//! failure note is kept for the UI to display. Effects play on detached
//! per-sound sinks; the melody runs on its own scheduler thread that feeds
//! a long-lived sink and is cancelled through an atomic flag.

pub mod sequencer;
pub mod synth;

use crate::game_logic::GameEvent;
use rodio::buffer::SamplesBuffer;
use rodio::{OutputStream, OutputStreamHandle, Sink};
use self::sequencer::{MelodySequencer, NOTE_GAIN, SCHEDULER_TICK_MS};
use self::synth::{render_chord, render_note, render_tone, Tone, Waveform, SAMPLE_RATE};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// Flap cue: a short, light triangle blip.
const FLAP_TONE: Tone = Tone {
    frequency: 440.0,
    waveform: Waveform::Triangle,
    duration: 0.1,
    lead_in: 0.0,
    gain: 0.3,
};

/// Score cue: a bright C5/E5 chord after a short lead-in.
const SCORE_CHORD: [Tone; 2] = [
    Tone {
        frequency: 523.25,
        waveform: Waveform::Sine,
        duration: 0.2,
        lead_in: 0.1,
        gain: 0.3,
    },
    Tone {
        frequency: 659.25,
        waveform: Waveform::Sine,
        duration: 0.3,
        lead_in: 0.1,
        gain: 0.3,
    },
];

/// Hit cue: a soft low sine.
const HIT_TONE: Tone = Tone {
    frequency: 220.0,
    waveform: Waveform::Sine,
    duration: 0.3,
    lead_in: 0.1,
    gain: 0.3,
};

struct AudioOutput {
    // Held for its lifetime; dropping it closes the device.
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

/// The game's one audio engine.
pub struct AudioEngine {
    output: Option<AudioOutput>,
    init_error: Option<String>,
    muted: bool,
    music_running: Option<Arc<AtomicBool>>,
}

impl AudioEngine {
    /// Open the default output device. Failure is permanent: the engine
    /// stays silent and remembers why.
    pub fn new() -> Self {
        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                output: Some(AudioOutput {
                    _stream: stream,
                    handle,
                }),
                init_error: None,
                muted: false,
                music_running: None,
            },
            Err(e) => Self {
                output: None,
                init_error: Some(format!("audio unavailable: {e}")),
                muted: false,
                music_running: None,
            },
        }
    }

    /// Why the device could not be opened, if it could not.
    pub fn init_error(&self) -> Option<&str> {
        self.init_error.as_deref()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the mute state. Muting silences effects and stops the melody;
    /// the caller decides whether unmuting should restart it. Returns the
    /// new state.
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        if self.muted {
            self.stop_music();
        }
        self.muted
    }

    /// Dispatch one simulation event to the matching trigger.
    pub fn handle_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::Flap => self.play_flap(),
            GameEvent::Score => self.play_score(),
            GameEvent::Hit => self.play_hit(),
            GameEvent::MusicStart => self.start_music(),
            GameEvent::MusicStop => self.stop_music(),
        }
    }

    pub fn play_flap(&self) {
        self.play_samples(render_tone(&FLAP_TONE));
    }

    pub fn play_score(&self) {
        self.play_samples(render_chord(&SCORE_CHORD));
    }

    pub fn play_hit(&self) {
        self.play_samples(render_tone(&HIT_TONE));
    }

    /// Fire-and-forget playback on a detached sink. Skipped while muted or
    /// without a device.
    fn play_samples(&self, samples: Vec<f32>) {
        if self.muted {
            return;
        }
        let Some(output) = &self.output else { return };
        if let Ok(sink) = Sink::try_new(&output.handle) {
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
            sink.detach();
        }
    }

    /// Whether the melody scheduler is currently alive.
    pub fn music_running(&self) -> bool {
        self.music_running
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }

    /// Spawn the melody scheduler. Starting while already running is a
    /// no-op, as is starting while muted or without a device.
    pub fn start_music(&mut self) {
        if self.muted || self.music_running() {
            return;
        }
        let Some(output) = &self.output else { return };

        let running = Arc::new(AtomicBool::new(true));
        self.music_running = Some(Arc::clone(&running));

        let handle = output.handle.clone();
        thread::spawn(move || run_music_scheduler(&handle, &running));
    }

    /// Signal the scheduler thread to wind down. Stopping while stopped is
    /// a no-op.
    pub fn stop_music(&mut self) {
        if let Some(flag) = self.music_running.take() {
            flag.store(false, Ordering::Relaxed);
        }
    }
}

impl Drop for AudioEngine {
    fn drop(&mut self) {
        self.stop_music();
    }
}

/// Scheduler loop: every tick, synthesize the notes the sequencer owes the
/// lookahead window and append them to the melody sink. Appending in
/// melody order onto one sink reproduces the scheduled timeline, because
/// the cursor advances by exactly the rendered durations.
fn run_music_scheduler(handle: &OutputStreamHandle, running: &AtomicBool) {
    let Ok(sink) = Sink::try_new(handle) else {
        running.store(false, Ordering::Relaxed);
        return;
    };

    let clock = Instant::now();
    let mut melody = MelodySequencer::new();
    melody.start(0.0);

    while running.load(Ordering::Relaxed) {
        let now = clock.elapsed().as_secs_f64();
        for note in melody.tick(now) {
            let samples = render_note(note.frequency, note.duration as f32, NOTE_GAIN);
            sink.append(SamplesBuffer::new(1, SAMPLE_RATE, samples));
        }
        thread::sleep(Duration::from_millis(SCHEDULER_TICK_MS));
    }
    sink.stop();
}
