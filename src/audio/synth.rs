//! Oscillator tone rendering.
//!
//! Every sound in the game is a handful of enveloped oscillator samples;
//! nothing is loaded from disk. Tones decay exponentially from their peak
//! gain to near-silence over their duration.

pub const SAMPLE_RATE: u32 = 44_100;

/// Gain floor the decay envelope ramps toward.
const MIN_GAIN: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Triangle,
}

/// One enveloped oscillator voice.
#[derive(Debug, Clone, Copy)]
pub struct Tone {
    pub frequency: f32,
    pub waveform: Waveform,
    /// Sounding length in seconds, excluding the lead-in.
    pub duration: f32,
    /// Leading silence in seconds.
    pub lead_in: f32,
    /// Peak gain at the start of the envelope.
    pub gain: f32,
}

fn oscillator_sample(waveform: Waveform, frequency: f32, t: f32) -> f32 {
    let phase = (t * frequency).fract();
    match waveform {
        Waveform::Sine => (phase * std::f32::consts::TAU).sin(),
        Waveform::Triangle => 4.0 * (phase - 0.5).abs() - 1.0,
    }
}

/// Exponential decay from `gain` to [`MIN_GAIN`] over `duration` seconds.
fn envelope(gain: f32, t: f32, duration: f32) -> f32 {
    if duration <= 0.0 {
        return 0.0;
    }
    let progress = (t / duration).clamp(0.0, 1.0);
    gain * (MIN_GAIN / gain).powf(progress)
}

/// Render a tone into mono samples: leading silence, then the enveloped
/// oscillator.
pub fn render_tone(tone: &Tone) -> Vec<f32> {
    let lead_samples = (SAMPLE_RATE as f32 * tone.lead_in) as usize;
    let sound_samples = (SAMPLE_RATE as f32 * tone.duration) as usize;

    let mut samples = vec![0.0; lead_samples + sound_samples];
    for (i, sample) in samples[lead_samples..].iter_mut().enumerate() {
        let t = i as f32 / SAMPLE_RATE as f32;
        *sample =
            oscillator_sample(tone.waveform, tone.frequency, t) * envelope(tone.gain, t, tone.duration);
    }
    samples
}

/// Mix several tones into one buffer, aligned at their own lead-ins. The
/// result is as long as the longest voice.
pub fn render_chord(tones: &[Tone]) -> Vec<f32> {
    let mut mixed = Vec::new();
    for tone in tones {
        let voice = render_tone(tone);
        if voice.len() > mixed.len() {
            mixed.resize(voice.len(), 0.0);
        }
        for (slot, sample) in mixed.iter_mut().zip(voice) {
            *slot += sample;
        }
    }
    mixed
}

/// Render one melody note: a sine voice whose envelope finishes decaying
/// just before the note ends, leaving a small articulation gap.
pub fn render_note(frequency: f32, duration: f32, gain: f32) -> Vec<f32> {
    let total = (SAMPLE_RATE as f32 * duration) as usize;
    let decay_over = (duration - 0.05).max(0.01);

    (0..total)
        .map(|i| {
            let t = i as f32 / SAMPLE_RATE as f32;
            oscillator_sample(Waveform::Sine, frequency, t) * envelope(gain, t, decay_over)
        })
        .collect()
}
