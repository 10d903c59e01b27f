use quiz_core::model::ScorePercent;
use services::ScoreGauge;

/// Percentage bar standing in for a gauge chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GaugeModel {
    configured: bool,
    rendered: bool,
    value: Option<ScorePercent>,
}

impl GaugeModel {
    /// The gauge draws only after it was rendered and given a value.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.configured && self.rendered && self.value.is_some()
    }

    #[must_use]
    pub fn value(&self) -> Option<ScorePercent> {
        self.value
    }

    /// Display text such as `"75.0%"` or `"100%"`.
    #[must_use]
    pub fn label(&self) -> String {
        self.value
            .map(|score| format!("{score}%"))
            .unwrap_or_default()
    }

    /// Fill width in CSS percent, one decimal.
    #[must_use]
    pub fn fill_percent(&self) -> String {
        let fill = self.value.map_or(0.0, |score| score.fraction() * 100.0);
        format!("{fill:.1}")
    }
}

impl ScoreGauge for GaugeModel {
    fn configure(&mut self) {
        self.configured = true;
    }

    fn render(&mut self) {
        self.rendered = true;
    }

    fn set_value(&mut self, score: ScorePercent) {
        self.value = Some(score);
    }
}
