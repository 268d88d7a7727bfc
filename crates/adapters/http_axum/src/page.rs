//! The sensor panel page.
//!
//! A fixed layout: one box per sensor slot (icon, label, value, unit) and a
//! free-text "Latest Calculations" block. Values are HTML-escaped, so the
//! viewer sees each reading exactly as the device sent it. The embedded
//! script re-polls the relay endpoints every `refresh_ms` and writes each
//! `200` body into its element as plain text.

use askama::Template;
use axum::extract::State;
use axum::response::Html;

use sensorpanel_domain::display::Display as DisplayState;
use sensorpanel_domain::slot::Slot;

use crate::error::PageError;
use crate::state::AppState;

/// Page heading and title.
pub const TITLE: &str = "Temperature, Humidity and Heat Monitoring System";

/// One sensor box.
pub struct SensorBox {
    element_id: &'static str,
    label: &'static str,
    unit: &'static str,
    icon: &'static str,
    value: String,
}

/// Endpoint → element pair polled by the page script.
pub struct SlotBinding {
    endpoint: &'static str,
    element_id: &'static str,
}

/// Sensor panel template.
#[derive(Template)]
#[template(path = "panel.html")]
pub struct PanelTemplate {
    title: &'static str,
    refresh_ms: u64,
    sensors: Vec<SensorBox>,
    results_element_id: &'static str,
    calculation_results: String,
    bindings: Vec<SlotBinding>,
}

impl PanelTemplate {
    /// Build the page for the given display state.
    #[must_use]
    pub fn new(display: &DisplayState, refresh_ms: u64) -> Self {
        let sensors = Slot::ALL
            .into_iter()
            .filter(|slot| slot.is_sensor())
            .map(|slot| SensorBox {
                element_id: slot.element_id(),
                label: slot.label(),
                unit: slot.unit().unwrap_or_default(),
                icon: slot.icon().unwrap_or_default(),
                value: display.get(slot).to_string(),
            })
            .collect();

        let bindings = Slot::ALL
            .into_iter()
            .map(|slot| SlotBinding {
                endpoint: slot.endpoint(),
                element_id: slot.element_id(),
            })
            .collect();

        Self {
            title: TITLE,
            refresh_ms,
            sensors,
            results_element_id: Slot::CalculationResults.element_id(),
            calculation_results: display.calculation_results.to_string(),
            bindings,
        }
    }
}

/// `GET /` — the sensor panel.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, PageError> {
    let page = PanelTemplate::new(&state.store.snapshot(), state.refresh_ms);
    Ok(Html(page.render()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensorpanel_domain::update::SlotUpdate;

    fn render(display: &DisplayState) -> String {
        PanelTemplate::new(display, 1000).render().unwrap()
    }

    #[test]
    fn should_render_placeholders_for_fresh_display() {
        let html = render(&DisplayState::default());
        assert!(html.contains(r#"<span id="temperature">0.00</span>"#));
        assert!(html.contains(r#"<span id="humidity">0.00</span>"#));
        assert!(html.contains(r#"<span id="heatindex">0.00</span>"#));
        assert!(html.contains(r#"<p id="calculationResults"></p>"#));
    }

    #[test]
    fn should_render_heading_and_units() {
        let html = render(&DisplayState::default());
        assert!(html.contains("<h1>Temperature, Humidity and Heat Monitoring System</h1>"));
        assert!(html.contains("Heat Index: "));
        assert!(html.contains(r#"<span class="units">%</span>"#));
        assert!(html.contains("fa-thermometer-half"));
    }

    #[test]
    fn should_render_current_values() {
        let mut display = DisplayState::default();
        display.apply(SlotUpdate::new(Slot::Temperature, "23.50", 1));
        display.apply(SlotUpdate::new(
            Slot::CalculationResults,
            "min=20 max=27 avg=23.4",
            1,
        ));

        let html = render(&display);
        assert!(html.contains(r#"<span id="temperature">23.50</span>"#));
        assert!(html.contains(r#"<p id="calculationResults">min=20 max=27 avg=23.4</p>"#));
    }

    #[test]
    fn should_escape_markup_in_readings() {
        let mut display = DisplayState::default();
        display.apply(SlotUpdate::new(
            Slot::CalculationResults,
            "<script>alert(1)</script>",
            1,
        ));

        let html = render(&display);
        let open = r#"<p id="calculationResults">"#;
        let start = html.find(open).unwrap() + open.len();
        let content = &html[start..start + html[start..].find("</p>").unwrap()];
        assert!(!content.contains('<'), "unescaped markup: {content}");
        assert!(content.contains("script"));
        assert!(content.contains("alert(1)"));
    }

    #[test]
    fn should_poll_every_relay_endpoint_at_refresh_interval() {
        let html = PanelTemplate::new(&DisplayState::default(), 750).render().unwrap();
        for slot in Slot::ALL {
            assert!(html.contains(slot.endpoint()), "missing {}", slot.endpoint());
        }
        assert!(html.contains("}, 750);"));
        assert!(html.contains("textContent = xhr.responseText"));
    }
}
