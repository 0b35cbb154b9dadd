use midfit::{fit, split_truncation, Container, DisplaySurface, FitText, FixedAdvanceMeasure, FontSpec, MeasureSurface};
use midfit::{FitConfig, ResizeObserver, ELLIPSIS};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::fs;
use std::env;

const ALPHABET: &[char] = &['a', 'b', 'm', 'w', 'W', 'i', '.', ' ', '日', 'é', '/'];

fn random_text(rng: &mut StdRng, max_len: usize) -> String {
    let len = rng.gen_range(0..=max_len);
    (0..len).map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())]).collect()
}

/// Proportional-ish measure: every char has its own positive width.
fn glyph_width(c: char) -> f32 {
    match c {
        'i' | '.' => 3.0,
        'w' | 'W' | 'm' => 11.0,
        '日' => 14.0,
        ' ' => 4.0,
        _ => 7.0,
    }
}

fn measure(s: &str) -> f32 {
    s.chars().map(glyph_width).sum()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

#[test]
fn test_fit_properties_on_random_labels() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..2000 {
        let full = random_text(&mut rng, 40);
        let avail = rng.gen_range(1.0..300.0f32);
        let result = fit(&full, avail, measure).expect("settled width always fits");

        if measure(&full) <= avail {
            assert_eq!(result, full);
            continue;
        }

        let len = char_len(&full);
        if len <= 2 {
            assert_eq!(result, full);
            continue;
        }

        let (prefix, suffix) = split_truncation(&result)
            .unwrap_or_else(|| panic!("{:?} -> {:?} has no single ellipsis", full, result));
        let k = char_len(prefix);
        assert_eq!(k, char_len(suffix));
        assert!(k >= 1);
        assert!(2 * k < len);
        assert!(full.starts_with(prefix));
        assert!(full.ends_with(suffix));

        // fits, or is the minimal one-char fallback
        assert!(measure(&result) <= avail || k == 1, "{:?} at {}", result, avail);

        // maximal: one more char on each side would not fit
        if k < len / 2 {
            let longer = midfit::truncate_middle(&full, k + 1);
            assert!(measure(&longer) > avail, "{:?} fits at {}", longer, avail);
        }
    }
}

#[test]
fn test_fit_is_idempotent_on_random_labels() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..1000 {
        let full = random_text(&mut rng, 30);
        let avail = rng.gen_range(1.0..200.0f32);
        let once = fit(&full, avail, measure).unwrap();
        let twice = fit(&once, avail, measure).unwrap();
        assert_eq!(once, twice, "full {:?} avail {}", full, avail);
    }
}

#[test]
fn test_fit_is_monotone_in_width() {
    let mut rng = StdRng::seed_from_u64(1234);

    for _ in 0..300 {
        let full = random_text(&mut rng, 40);
        let mut previous = 0;
        let mut avail = 1.0;
        while avail < 400.0 {
            let shown = char_len(&fit(&full, avail, measure).unwrap());
            let kept = if shown == char_len(&full) { shown } else { shown - 1 };
            assert!(kept >= previous, "{:?} shrank at {}", full, avail);
            previous = kept;
            avail += 5.0;
        }
    }
}

/// Container whose width is driven by the test, like a window being dragged.
struct Panel {
    width: f32,
    text: String,
}

impl Container for Panel {
    fn current_width(&self) -> f32 {
        self.width
    }

    fn full_text(&self) -> &str {
        &self.text
    }
}

#[derive(Default)]
struct RecordingDisplay {
    font: FontSpec,
    history: Vec<String>,
}

impl DisplaySurface for RecordingDisplay {
    fn font(&self) -> FontSpec {
        self.font.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.history.push(text.to_string());
    }
}

/// Counts how often it is measured, to check the search stays logarithmic.
struct CountingMeasure {
    inner: FixedAdvanceMeasure,
    measurements: RefCell<usize>,
}

impl MeasureSurface for CountingMeasure {
    fn set_font(&mut self, font: &FontSpec) {
        self.inner.set_font(font);
    }

    fn set_text(&mut self, text: &str) {
        self.inner.set_text(text);
    }

    fn rendered_width(&self) -> f32 {
        *self.measurements.borrow_mut() += 1;
        self.inner.rendered_width()
    }
}

#[test]
fn test_resize_drives_updates() {
    let mut panel = Panel {
        width: 0.0,
        text: "abcdefghij".to_string(),
    };
    let mut display = RecordingDisplay::default();
    let mut observer = ResizeObserver::new();
    let mut fitter = FitText::from_container(&panel, FixedAdvanceMeasure::default());

    // initial pass before layout settles, then a drag from 20 down to 1 and back;
    // every settled notification writes, even when 3 and 1 both give "a…j"
    let widths = [0.0, 0.0, 20.0, 20.0, 9.0, 7.0, 7.2, 3.0, 1.0, 12.0];
    for width in widths {
        panel.width = width;
        if observer.observe(panel.current_width()).is_some() {
            fitter.update(&panel, &mut display);
        }
    }

    assert_eq!(
        display.history,
        vec!["abcdefghij", "abcd…ghij", "abc…hij", "a…j", "a…j", "abcdefghij"]
    );
}

#[test]
fn test_long_label_measurement_count() {
    let full: String = "0123456789".repeat(100);
    let mut fitter = FitText::new(
        full.as_str(),
        CountingMeasure {
            inner: FixedAdvanceMeasure::default(),
            measurements: RefCell::new(0),
        },
    );

    assert!(fitter.recompute(&FontSpec::monospace(12.0), 61.0));
    let shown = fitter.displayed().unwrap();
    assert_eq!(shown.chars().count(), 61);
    assert_eq!(shown.chars().nth(30), Some(ELLIPSIS));
    assert!(*fitter.measure().measurements.borrow() <= 1 + 10);
}

#[test]
fn test_config_round_trip_drives_cli_width() -> Result<()> {
    let path = env::temp_dir().join("midfit_integration").join("config.json");
    let _ = fs::remove_file(&path);

    let config = FitConfig {
        width: 9,
        ..FitConfig::default()
    };
    config.save(&path)?;
    let loaded = FitConfig::load_or_default(Some(&path))?;
    assert_eq!(loaded, config);

    let avail = loaded.width as f32 * loaded.advance;
    let mut measure = FixedAdvanceMeasure::new(loaded.advance);
    let shown = fit("src/widget/fit_label.rs", avail, |s| measure.measure(s)).unwrap();
    assert_eq!(shown, "src/…l.rs");

    fs::remove_file(&path)?;
    Ok(())
}
