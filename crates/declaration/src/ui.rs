//! UI helper components

use eframe::egui;

pub(crate) const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 212, 170);
const BUTTON_FILL: egui::Color32 = egui::Color32::from_rgb(0, 180, 150);

/// Open URL in a new browser tab
pub fn open_url_new_tab(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(url, error = %e, "failed to open browser");
    }
}

/// Small accent-colored kicker above a heading, e.g. "03 / Take Action"
pub fn kicker(ui: &mut egui::Ui, text: &str) {
    ui.label(egui::RichText::new(text).small().color(ACCENT));
}

/// Large page heading
pub fn styled_heading(ui: &mut egui::Ui, text: &str) {
    ui.heading(egui::RichText::new(text).strong().size(26.0));
}

/// Section header with separator
pub fn section_header(ui: &mut egui::Ui, text: &str) {
    ui.add_space(10.0);
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(text).strong().size(14.0));
    });
    ui.separator();
}

/// Italic quote with an accent rule on the left
pub fn blockquote(ui: &mut egui::Ui, text: &str) {
    let response = egui::Frame::none()
        .inner_margin(egui::Margin {
            left: 16.0,
            right: 0.0,
            top: 2.0,
            bottom: 2.0,
        })
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).italics().size(16.0));
        })
        .response;
    let rect = response.rect;
    ui.painter()
        .vline(rect.left(), rect.y_range(), egui::Stroke::new(2.0, ACCENT));
}

/// Link or plain line depending on whether a URL is present
pub fn credit_line(ui: &mut egui::Ui, label: &str, url: Option<&str>) {
    match url {
        Some(url) => {
            if ui
                .link(egui::RichText::new(label).monospace().small())
                .on_hover_text(url)
                .clicked()
            {
                open_url_new_tab(url);
            }
        }
        None => {
            ui.label(egui::RichText::new(label).monospace().small().weak());
        }
    }
}

/// Single-line text edit used by the signing form
pub fn text_input(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    enabled: bool,
) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::TextEdit::singleline(value)
            .hint_text(hint)
            .desired_width(f32::INFINITY),
    )
}

/// Multiline text edit with a fixed number of visible rows
pub fn multiline_input(
    ui: &mut egui::Ui,
    value: &mut String,
    hint: &str,
    rows: usize,
    enabled: bool,
) -> egui::Response {
    ui.add_enabled(
        enabled,
        egui::TextEdit::multiline(value)
            .hint_text(hint)
            .desired_rows(rows)
            .desired_width(f32::INFINITY),
    )
}

/// Error message display
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("❌").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(220, 80, 80)));
    });
}

/// Success message display
pub fn success_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("✅").size(16.0));
        ui.label(egui::RichText::new(message).color(egui::Color32::from_rgb(80, 200, 120)));
    });
}

/// Informational message display
pub fn info_message(ui: &mut egui::Ui, message: &str) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new("ℹ").size(16.0));
        ui.label(message);
    });
}

/// Wallet badge shown once an account is adopted
pub fn wallet_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .stroke(egui::Stroke::new(1.0, ACCENT))
        .rounding(12.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(egui::RichText::new(text).monospace().color(ACCENT));
        });
}

// =============================================================================
// STYLED BUTTONS
// =============================================================================

/// Primary button with enabled state
pub fn primary_button_enabled(ui: &mut egui::Ui, text: &str, enabled: bool) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0).color(egui::Color32::WHITE))
        .min_size(egui::vec2(ui.available_width(), 34.0))
        .fill(BUTTON_FILL);
    ui.add_enabled(enabled, btn)
}

/// Secondary action button - subdued, outline style
pub fn secondary_button(ui: &mut egui::Ui, text: &str) -> egui::Response {
    let btn = egui::Button::new(egui::RichText::new(text).size(14.0))
        .min_size(egui::vec2(90.0, 30.0));
    ui.add(btn)
}

// =============================================================================
// VISUAL GROUPING
// =============================================================================

/// Render content in a subtle card/frame
pub fn card(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui)) {
    egui::Frame::none()
        .fill(ui.visuals().faint_bg_color)
        .rounding(6.0)
        .inner_margin(12.0)
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            add_contents(ui);
        });
}

/// Grey skeleton row shown while the list is loading
pub fn placeholder_row(ui: &mut egui::Ui) {
    card(ui, |ui| {
        let width = ui.available_width();
        let fill = ui.visuals().widgets.inactive.bg_fill;
        for fraction in [0.35, 0.8] {
            let (rect, _) =
                ui.allocate_exact_size(egui::vec2(width * fraction, 10.0), egui::Sense::hover());
            ui.painter().rect_filled(rect, 3.0, fill);
            ui.add_space(4.0);
        }
    });
}
