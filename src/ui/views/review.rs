use crate::surface::QuizEvent;
use crate::ui::helpers::{alert, severity_color};
use crate::ui::layout::{scroll_panel, two_button_row};
use crate::view_models::{ResultView, ReviewItem};
use egui::{Color32, Context, RichText, Ui};

pub fn ui_results(ctx: &Context, result: &ResultView) -> Vec<QuizEvent> {
    let mut events = Vec::new();
    scroll_panel(ctx, 760.0, |ui| {
        alert(ui, result.severity(), |ui| {
            ui.heading(result.score_line());
            ui.label(result.tier.message());
        });
        ui.add_space(8.0);

        let (retake, regenerate) = two_button_row(ui, 420.0, "⟲ Retake quiz", "🎲 New questions");
        if retake {
            events.push(QuizEvent::Retake);
        }
        if regenerate {
            events.push(QuizEvent::Regenerate);
        }

        ui.add_space(14.0);
        ui.heading("Review your answers:");
        ui.add_space(6.0);
        for item in &result.review {
            review_item(ui, item);
            ui.add_space(10.0);
        }
    });
    events
}

fn review_item(ui: &mut Ui, item: &ReviewItem) {
    let tint = severity_color(item.severity());
    ui.horizontal_wrapped(|ui| {
        ui.label(
            RichText::new(format!(" {} ", item.badge()))
                .strong()
                .color(Color32::WHITE)
                .background_color(tint),
        );
        ui.label(RichText::new(item.heading()).strong());
    });

    ui.indent(("review", item.number), |ui| {
        match &item.your_answer {
            None => {
                ui.label(
                    RichText::new(format!("Your Answer: {}", ReviewItem::NO_ANSWER))
                        .italics()
                        .weak(),
                );
            }
            Some(answer) => {
                ui.label(RichText::new(format!("Your Answer: {answer}")).color(tint));
            }
        }
        if let Some(correct) = &item.correct_answer {
            ui.label(
                RichText::new(format!("Correct Answer: {correct}"))
                    .color(severity_color(crate::view_models::Severity::Success)),
            );
        }
        alert(ui, item.severity(), |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.strong(item.status());
                ui.label(item.explanation.as_str());
            });
        });
    });
}
