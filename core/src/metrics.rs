// core/src/metrics.rs
use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};

/// Tellere for pakkelesing. Én prosessvid instans via `metrics()`.
pub struct Metrics {
    pub registry: Registry,
    packages_total: IntCounterVec,
    package_errors_total: IntCounterVec,
}

impl Metrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();

        let packages_total = IntCounterVec::new(
            Opts::new("fitness_packages_total", "Accepted sensor packages per workout code"),
            &["code"],
        )?;
        let package_errors_total = IntCounterVec::new(
            Opts::new("fitness_package_errors_total", "Rejected sensor packages per error kind"),
            &["kind"],
        )?;

        registry.register(Box::new(packages_total.clone()))?;
        registry.register(Box::new(package_errors_total.clone()))?;

        Ok(Self { registry, packages_total, package_errors_total })
    }

    pub fn package_accepted(&self, code: &str) {
        self.packages_total.with_label_values(&[code]).inc();
    }

    pub fn package_rejected(&self, kind: &str) {
        self.package_errors_total.with_label_values(&[kind]).inc();
    }

    pub fn accepted_count(&self, code: &str) -> u64 {
        self.packages_total.with_label_values(&[code]).get()
    }

    pub fn rejected_count(&self, kind: &str) -> u64 {
        self.package_errors_total.with_label_values(&[kind]).get()
    }

    /// Registeret i Prometheus tekstformat.
    pub fn gather_text(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            log::warn!("failed to encode metrics: {e}");
            return String::new();
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

// Navn og etiketter er faste, så registreringen kan ikke kollidere.
static METRICS: Lazy<Metrics> =
    Lazy::new(|| Metrics::new().expect("static metric definitions are valid"));

pub fn metrics() -> &'static Metrics {
    &METRICS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_show_up_in_text_output() {
        let m = Metrics::new().unwrap();
        m.package_accepted("RUN");
        m.package_accepted("RUN");
        m.package_rejected("negative_value");

        assert_eq!(m.accepted_count("RUN"), 2);
        assert_eq!(m.rejected_count("negative_value"), 1);

        let text = m.gather_text();
        assert!(text.contains("fitness_packages_total{code=\"RUN\"} 2"));
        assert!(text.contains("fitness_package_errors_total{kind=\"negative_value\"} 1"));
    }
}
