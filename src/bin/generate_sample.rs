use std::path::PathBuf;

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Per-class feature means and spreads: (heart rate, QRS duration in s,
/// P amplitude, T amplitude).
struct ClassProfile {
    label: &'static str,
    rows: usize,
    hr: (f64, f64),
    qrs: (f64, f64),
    p_amp: (f64, f64),
    t_amp: (f64, f64),
}

const PROFILES: [ClassProfile; 3] = [
    ClassProfile {
        label: "Normal",
        rows: 420,
        hr: (72.0, 8.0),
        qrs: (0.09, 0.01),
        p_amp: (0.15, 0.03),
        t_amp: (0.30, 0.05),
    },
    ClassProfile {
        label: "Arrhythmia",
        rows: 240,
        hr: (112.0, 22.0),
        qrs: (0.13, 0.025),
        p_amp: (0.08, 0.04),
        t_amp: (0.22, 0.08),
    },
    ClassProfile {
        label: "Stress",
        rows: 180,
        hr: (128.0, 12.0),
        qrs: (0.08, 0.01),
        p_amp: (0.18, 0.03),
        t_amp: (0.26, 0.05),
    },
];

fn main() -> Result<()> {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_ecg.csv"));

    let mut rng = SimpleRng::new(42);
    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    writer.write_record([
        "Heart_Rate",
        "RR_Mean",
        "QRS_Duration",
        "P_Amplitude",
        "T_Amplitude",
        "Label",
    ])?;

    let mut written = 0usize;
    for profile in &PROFILES {
        for _ in 0..profile.rows {
            let hr = rng.gauss(profile.hr.0, profile.hr.1).max(35.0);
            let rr_mean = 60.0 / hr;
            let qrs = rng.gauss(profile.qrs.0, profile.qrs.1).max(0.04);
            let p_amp = rng.gauss(profile.p_amp.0, profile.p_amp.1);
            let t_amp = rng.gauss(profile.t_amp.0, profile.t_amp.1);

            writer.write_record([
                format!("{hr:.1}"),
                format!("{rr_mean:.3}"),
                format!("{qrs:.3}"),
                format!("{p_amp:.3}"),
                format!("{t_amp:.3}"),
                profile.label.to_string(),
            ])?;
            written += 1;
        }
    }
    writer.flush()?;

    println!("Wrote {written} ECG records to {}", output_path.display());
    Ok(())
}
