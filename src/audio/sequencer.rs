//! Background-melody sequencing.
//!
//! The sequencer is a plain state machine over a virtual clock: `tick(now)`
//! returns every note that should start within the lookahead window and
//! advances the cursor, wrapping the melody indefinitely. It knows nothing
//! about audio devices, which keeps its start/stop invariants testable.

/// How far ahead of `now` a tick schedules notes.
pub const LOOKAHEAD_SECS: f64 = 1.0;

/// Cadence at which the owning scheduler should call `tick`.
pub const SCHEDULER_TICK_MS: u64 = 100;

/// Peak gain for melody notes.
pub const NOTE_GAIN: f32 = 0.2;

/// A melody step: note name plus its length in seconds.
#[derive(Debug, Clone, Copy)]
pub struct MelodyNote {
    pub name: &'static str,
    pub duration: f64,
}

/// The looping background tune: an arpeggiated C-major phrase answered by a
/// D-minor one.
pub const MELODY: [MelodyNote; 14] = [
    MelodyNote { name: "C4", duration: 0.25 },
    MelodyNote { name: "E4", duration: 0.25 },
    MelodyNote { name: "G4", duration: 0.25 },
    MelodyNote { name: "C5", duration: 0.5 },
    MelodyNote { name: "G4", duration: 0.25 },
    MelodyNote { name: "E4", duration: 0.25 },
    MelodyNote { name: "C4", duration: 0.5 },
    MelodyNote { name: "D4", duration: 0.25 },
    MelodyNote { name: "F4", duration: 0.25 },
    MelodyNote { name: "A4", duration: 0.25 },
    MelodyNote { name: "D5", duration: 0.5 },
    MelodyNote { name: "A4", duration: 0.25 },
    MelodyNote { name: "F4", duration: 0.25 },
    MelodyNote { name: "D4", duration: 0.5 },
];

/// Equal-tempered frequencies for the two octaves the melody uses.
pub fn note_frequency(name: &str) -> Option<f32> {
    let frequency = match name {
        "C4" => 261.63,
        "D4" => 293.66,
        "E4" => 329.63,
        "F4" => 349.23,
        "G4" => 392.00,
        "A4" => 440.00,
        "B4" => 493.88,
        "C5" => 523.25,
        "D5" => 587.33,
        "E5" => 659.25,
        "F5" => 698.46,
        "G5" => 783.99,
        "A5" => 880.00,
        "B5" => 987.77,
        _ => return None,
    };
    Some(frequency)
}

/// A note the scheduler owes the audio device.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScheduledNote {
    /// Virtual start time in seconds.
    pub at: f64,
    pub frequency: f32,
    pub duration: f64,
}

/// Melody playback cursor.
#[derive(Debug, Default)]
pub struct MelodySequencer {
    note_index: usize,
    next_note_time: f64,
    running: bool,
}

impl MelodySequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin playback from the top of the melody at `now`. Starting while
    /// already running is a no-op; returns whether the call took effect.
    pub fn start(&mut self, now: f64) -> bool {
        if self.running {
            return false;
        }
        self.running = true;
        self.note_index = 0;
        self.next_note_time = now;
        true
    }

    /// Halt playback. Stopping while stopped is a no-op; returns whether the
    /// call took effect.
    pub fn stop(&mut self) -> bool {
        let was_running = self.running;
        self.running = false;
        was_running
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// All notes due before `now + LOOKAHEAD_SECS`, in playback order. The
    /// cursor advances past everything returned; the melody wraps forever.
    pub fn tick(&mut self, now: f64) -> Vec<ScheduledNote> {
        let mut due = Vec::new();
        if !self.running {
            return due;
        }

        while self.next_note_time < now + LOOKAHEAD_SECS {
            let note = MELODY[self.note_index];
            if let Some(frequency) = note_frequency(note.name) {
                due.push(ScheduledNote {
                    at: self.next_note_time,
                    frequency,
                    duration: note.duration,
                });
            }
            self.next_note_time += note.duration;
            self.note_index = (self.note_index + 1) % MELODY.len();
        }
        due
    }
}
