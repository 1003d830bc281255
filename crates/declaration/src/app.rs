//! Main application state and update loop

use std::collections::VecDeque;

use eframe::egui;

use declaration_board_core::presentation::{
    connected_badge, display_date, overflow_text, quoted_message, signatory_label, submit_label,
    verify_url, wallet_prefix, EMPTY_SUBTITLE, EMPTY_TITLE,
};
use declaration_board_core::{ListView, Notice, NoticeKind, Signature};

use crate::board_bridge::BoardBridge;
use crate::narrative::{self, CREDITS};
use crate::ui::{self, ACCENT};

/// The main application state
pub struct App {
    bridge: BoardBridge,
    /// Notices waiting to be acknowledged, oldest first
    notices: VecDeque<Notice>,
}

impl App {
    /// Create a new App instance and start the initial load
    pub fn new(cc: &eframe::CreationContext<'_>, mut bridge: BoardBridge) -> Self {
        bridge.mount(&cc.egui_ctx);
        Self {
            bridge,
            notices: VecDeque::new(),
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        let notices = self.bridge.poll(ctx);
        self.notices.extend(notices);

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.heading(
                egui::RichText::new("✍ Declaration")
                    .size(22.0)
                    .color(ACCENT),
            );
            ui.add_space(4.0);
        });

        let in_flight = self.bridge.in_flight();
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "v{} · {} · built {}",
                        env!("CARGO_PKG_VERSION"),
                        short_git_hash(env!("GIT_HASH")),
                        env!("BUILD_TIME"),
                    ))
                    .small()
                    .weak(),
                );
                if in_flight > 0 {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(egui::RichText::new("Syncing...").small().weak());
                        ui.spinner();
                    });
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(10.0);
                self.render_intro(ui);
                ui.add_space(15.0);
                ui.columns(2, |cols| {
                    self.render_form(&mut cols[0], ctx);
                    self.render_list(&mut cols[1], ctx);
                });
                ui.add_space(40.0);
                render_colophon(ui);
                ui.add_space(20.0);
            });
        });

        self.render_notice(ctx);
    }
}

impl App {
    fn render_intro(&self, ui: &mut egui::Ui) {
        ui::kicker(ui, narrative::SIDE_LABEL);
        ui.label(
            egui::RichText::new(narrative::HERO_TITLE)
                .size(56.0)
                .strong(),
        );
        ui.label(
            egui::RichText::new(narrative::HERO_SUBTITLE)
                .size(22.0)
                .weak(),
        );
        ui.add_space(20.0);
        ui::blockquote(ui, narrative::DECLARATION_QUOTE);
        ui.add_space(12.0);
        ui.label(egui::RichText::new(narrative::HERO_CALL).weak());
        ui.label(
            egui::RichText::new(narrative::POWERED_BY)
                .small()
                .monospace()
                .weak(),
        );
        ui.add_space(30.0);
        ui.separator();
        ui.add_space(10.0);

        let count = self.bridge.board().count();
        ui::kicker(ui, narrative::SIGN_KICKER);
        ui::styled_heading(ui, narrative::SIGN_TITLE);
        ui.horizontal(|ui| {
            ui.label(
                egui::RichText::new(count.to_string())
                    .size(32.0)
                    .strong()
                    .color(ACCENT),
            );
            ui.label(egui::RichText::new(signatory_label(count)).size(16.0));
        });
    }

    fn render_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui::card(ui, |ui| {
            let submitting = self.bridge.board().is_submitting();
            let signer = self.bridge.board().wallet_state().signer();

            match signer {
                Some(address) => ui::wallet_badge(ui, &connected_badge(&address)),
                None => {
                    if ui::secondary_button(ui, "Connect Wallet (Optional)").clicked() {
                        self.bridge.connect_wallet(ctx);
                    }
                }
            }
            ui.add_space(10.0);

            ui.label(egui::RichText::new("Name *").strong());
            let draft = self.bridge.board_mut().draft_mut();
            ui::text_input(ui, &mut draft.name, "Your name", !submitting);
            ui.add_space(8.0);

            ui.label(egui::RichText::new("Message (Optional)").strong());
            ui::multiline_input(
                ui,
                &mut draft.message,
                "Why are you signing?",
                3,
                !submitting,
            );
            ui.add_space(12.0);

            let can_submit = self.bridge.board().can_submit();
            if ui::primary_button_enabled(ui, submit_label(submitting), can_submit).clicked() {
                if let Err(reason) = self.bridge.submit(ctx) {
                    tracing::debug!(?reason, "submit ignored");
                }
            }

            ui.add_space(6.0);
            ui.label(
                egui::RichText::new(narrative::SIGN_FOOTNOTE)
                    .small()
                    .weak(),
            );
        });
    }

    fn render_list(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let mut refresh = false;
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new("Recent Signatories").strong().size(14.0));
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                refresh = ui.small_button("⟳ Refresh").clicked();
            });
        });
        ui.separator();
        if refresh {
            self.bridge.refresh(ctx);
        }

        let board = self.bridge.board();
        let explorer_tx_url = board.config().explorer_tx_url.as_str();
        match board.list_view() {
            ListView::Loading { placeholder_rows } => {
                for _ in 0..placeholder_rows {
                    ui::placeholder_row(ui);
                    ui.add_space(6.0);
                }
            }
            ListView::Empty => {
                ui::card(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(EMPTY_TITLE).strong());
                        ui.label(egui::RichText::new(EMPTY_SUBTITLE).weak());
                    });
                });
            }
            ListView::Populated { visible, overflow } => {
                for signature in visible {
                    signature_card(ui, signature, explorer_tx_url);
                    ui.add_space(6.0);
                }
                if overflow > 0 {
                    ui.vertical_centered(|ui| {
                        ui.label(egui::RichText::new(overflow_text(overflow)).weak());
                    });
                }
            }
        }
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = self.notices.front() else {
            return;
        };

        let mut dismissed = false;
        egui::Window::new("Declaration")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                match notice.kind {
                    NoticeKind::Info => ui::info_message(ui, &notice.message),
                    NoticeKind::Success => ui::success_message(ui, &notice.message),
                    NoticeKind::Error => ui::error_message(ui, &notice.message),
                }
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    dismissed = ui.button("OK").clicked();
                });
            });

        if dismissed {
            self.notices.pop_front();
        }
    }
}

fn signature_card(ui: &mut egui::Ui, signature: &Signature, explorer_tx_url: &str) {
    ui::card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(&signature.name).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(display_date(&signature.timestamp))
                        .small()
                        .weak(),
                );
            });
        });

        if let Some(message) = signature.message.as_deref().filter(|m| !m.is_empty()) {
            ui.label(egui::RichText::new(quoted_message(message)).italics());
        }

        if signature.signer_wallet.is_some() || signature.tx_hash.is_some() {
            ui.horizontal(|ui| {
                if let Some(wallet) = signature.signer_wallet.as_deref() {
                    ui.label(egui::RichText::new(wallet_prefix(wallet)).monospace().weak());
                }
                if let Some(tx_hash) = signature.tx_hash.as_deref() {
                    if ui
                        .link("Verify →")
                        .on_hover_text("Open the transaction in the explorer")
                        .clicked()
                    {
                        ui::open_url_new_tab(&verify_url(explorer_tx_url, tx_hash));
                    }
                }
            });
        }
    });
}

fn render_colophon(ui: &mut egui::Ui) {
    ui.separator();
    ui.add_space(10.0);
    ui::kicker(ui, narrative::ABOUT_KICKER);
    ui::styled_heading(ui, narrative::ABOUT_TITLE);
    ui.add_space(10.0);

    ui.columns(CREDITS.len(), |cols| {
        for (col, group) in cols.iter_mut().zip(CREDITS.iter()) {
            ui::section_header(col, group.heading);
            for credit in group.entries {
                ui::credit_line(col, credit.label, credit.url);
            }
        }
    });

    ui.add_space(30.0);
    ui::section_header(ui, narrative::WHY_TITLE);
    for paragraph in narrative::WHY_PARAGRAPHS {
        ui.label(egui::RichText::new(paragraph).weak());
        ui.add_space(6.0);
    }

    ui.add_space(30.0);
    ui.separator();
    ui.horizontal_wrapped(|ui| {
        ui.label(egui::RichText::new(narrative::COPYRIGHT).small().weak());
        ui.label(egui::RichText::new(narrative::STORAGE_NOTE).small().weak());
    });
}

fn short_git_hash(hash: &str) -> &str {
    hash.get(..7).unwrap_or(hash)
}
