use super::ApAutomator;
use crate::upload::intake::ADVERTISED_MAX_BYTES;
use crate::upload::{subtitle, StatusIcon, StatusView, UploadRecord};
use crate::utils::color::{
    ToneExt, EMERALD_500, GRAY_400, GRAY_900, INDIGO_500, INDIGO_600, RED_500,
};
use crate::utils::file_size::FileSizeUtils;
use eframe::egui::{self, Align2, Color32, RichText, Stroke};

const FEATURES: [(&str, &str, &str); 3] = [
    ("📄", "PDF & Scans", "High-speed OCR for all PDF documents."),
    (
        "⚡",
        "Image Recognition",
        "JPEG/PNG processing for receipts and photo captures.",
    ),
    (
        "✉",
        "Email Ingestion",
        "Direct processing of email attachments and bodies.",
    ),
];

const HERO_TILES: [(&str, &str); 3] = [
    ("📄", "PDF OCR"),
    ("⚡", "AI Extraction"),
    ("✉", "Email Ingestion"),
];

impl ApAutomator {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("⚡").size(22.0).color(INDIGO_600));
                ui.label(
                    RichText::new("AP Automator")
                        .size(20.0)
                        .strong()
                        .color(GRAY_900),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("Start Uploading").clicked() {
                        self.pick_file();
                    }
                });
            });
            ui.add_space(8.0);
        });

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.add_space(6.0);
            ui.vertical_centered(|ui| {
                let year = time::OffsetDateTime::now_utc().year();
                ui.label(
                    RichText::new(format!(
                        "© {} AP Automator | Hackathon Project. Powered by IBM Orchestrate.",
                        year
                    ))
                    .color(GRAY_400)
                    .small(),
                );
            });
            ui.add_space(6.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if render_hero(ui).clicked() {
                    self.pick_file();
                }
                ui.add_space(30.0);
                ui.vertical_centered(|ui| {
                    ui.heading(RichText::new("Secure Document Ingestion").strong());
                });
                ui.add_space(20.0);

                ui.columns(2, |columns| {
                    render_features(&mut columns[0]);
                    self.render_drop_zone(&mut columns[1]);
                });

                if let Some(error) = &self.state.error_message {
                    ui.add_space(10.0);
                    ui.vertical_centered(|ui| {
                        ui.colored_label(RED_500, error.as_str());
                    });
                }
                ui.add_space(20.0);
            });
        });

        if let Some(record) = self.simulator.record().cloned() {
            self.render_status(ctx, &record);
        }
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let (stroke, fill) = if self.state.is_dragging {
            (Stroke::new(3.0, INDIGO_500), INDIGO_500.gamma_multiply(0.1))
        } else {
            (
                Stroke::new(2.0, ui.visuals().widgets.noninteractive.bg_stroke.color),
                Color32::TRANSPARENT,
            )
        };

        egui::Frame::none()
            .stroke(stroke)
            .fill(fill)
            .rounding(16.0)
            .inner_margin(30.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let cloud = if self.state.is_dragging {
                        INDIGO_600
                    } else {
                        GRAY_400
                    };
                    ui.label(RichText::new("☁").size(48.0).color(cloud));
                    ui.add_space(10.0);
                    ui.label(RichText::new("Drop file here, or").strong());
                    let select = RichText::new("Click to select a file")
                        .strong()
                        .color(INDIGO_600);
                    if ui.link(select).clicked() {
                        self.pick_file();
                    }
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!(
                            "Maximum file size {}. Automatically starts workflow.",
                            FileSizeUtils::format_size(ADVERTISED_MAX_BYTES)
                        ))
                        .small()
                        .color(GRAY_400),
                    );
                });
            });
    }

    fn render_status(&mut self, ctx: &egui::Context, record: &UploadRecord) {
        let view = StatusView::for_record(record);
        let tone = view.tone.color();
        let mut dismissed = false;

        egui::Window::new("upload-status")
            .title_bar(false)
            .resizable(false)
            .collapsible(false)
            .anchor(Align2::RIGHT_BOTTOM, [-24.0, -48.0])
            .fixed_size([320.0, 0.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    match view.icon {
                        StatusIcon::Spinner => {
                            ui.add(egui::Spinner::new().size(24.0).color(tone));
                        }
                        StatusIcon::Check => {
                            ui.label(RichText::new("✔").size(24.0).color(EMERALD_500));
                        }
                        StatusIcon::Cross => {
                            ui.label(RichText::new("✖").size(24.0).color(RED_500));
                        }
                    }
                    ui.vertical(|ui| {
                        ui.label(RichText::new(record.file_name()).strong());
                        ui.label(RichText::new(subtitle(record)).small().color(GRAY_400));
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        if ui.small_button("✖").on_hover_text("Dismiss").clicked() {
                            dismissed = true;
                        }
                    });
                });

                ui.add_space(8.0);
                let progress = f32::from(record.progress_percent()) / 100.0;
                ui.add(egui::ProgressBar::new(progress).fill(tone));
                ui.add_space(4.0);
                ui.label(RichText::new(&view.text).small().color(tone));
            });

        if dismissed {
            self.dismiss();
        }
    }
}

/// Returns the "Upload Invoice Now" button so the caller can open the picker.
fn render_hero(ui: &mut egui::Ui) -> egui::Response {
    ui.add_space(20.0);
    ui.label(
        RichText::new("THE FUTURE OF FINANCE AUTOMATION")
            .small()
            .strong()
            .color(INDIGO_500),
    );
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new("Intelligent Invoice").size(32.0).strong());
        ui.label(
            RichText::new("Processing.")
                .size(32.0)
                .strong()
                .color(INDIGO_500),
        );
    });
    ui.add_space(6.0);
    ui.label(
        RichText::new(
            "Upload any document (PDF, image, or email) and instantly initiate the \
             automated accounts payable workflow orchestrated by IBM.",
        )
        .color(ui.visuals().text_color().gamma_multiply(0.7)),
    );

    ui.add_space(16.0);
    let upload = ui
        .horizontal(|ui| {
            let label = RichText::new("Upload Invoice Now")
                .strong()
                .color(Color32::WHITE);
            let upload = ui.add(
                egui::Button::new(label)
                    .fill(INDIGO_600)
                    .min_size(egui::vec2(180.0, 36.0)),
            );
            ui.add(
                egui::Button::new(RichText::new("Learn More").color(INDIGO_500))
                    .stroke(Stroke::new(1.0, INDIGO_500))
                    .fill(Color32::TRANSPARENT)
                    .min_size(egui::vec2(120.0, 36.0)),
            );
            upload
        })
        .inner;

    ui.add_space(16.0);
    ui.horizontal(|ui| {
        for (icon, title) in HERO_TILES {
            egui::Frame::none()
                .stroke(Stroke::new(1.0, INDIGO_500.gamma_multiply(0.5)))
                .rounding(12.0)
                .inner_margin(12.0)
                .show(ui, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.label(RichText::new(icon).size(24.0).color(INDIGO_500));
                        ui.label(RichText::new(title).small());
                    });
                });
        }
    });

    upload
}

fn render_features(ui: &mut egui::Ui) {
    ui.label(RichText::new("Supported Input Types").strong().size(16.0));
    ui.separator();
    for (icon, title, description) in FEATURES {
        ui.add_space(8.0);
        ui.horizontal(|ui| {
            ui.label(RichText::new(icon).size(20.0).color(INDIGO_600));
            ui.vertical(|ui| {
                ui.label(RichText::new(title).strong());
                ui.label(RichText::new(description).small().color(GRAY_400));
            });
        });
    }
}

#[cfg(test)]
#[path = "ui_test.rs"]
mod tests;
