use crate::surface::QuizEvent;
use crate::ui::layout::scroll_panel;
use crate::view_models::QuestionForm;
use egui::{Button, Context, Frame, Margin, RichText};

pub fn ui_quiz_form(ctx: &Context, questions: &[QuestionForm]) -> Vec<QuizEvent> {
    let mut events = Vec::new();
    scroll_panel(ctx, 760.0, |ui| {
        ui.heading("❓ Test your knowledge");
        let answered = questions.iter().filter(|q| q.selected.is_some()).count();
        ui.weak(format!("{answered} of {} answered", questions.len()));
        ui.add_space(10.0);

        for q in questions {
            Frame::default()
                .fill(ui.visuals().faint_bg_color)
                .inner_margin(Margin::symmetric(14, 10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.label(RichText::new(q.heading()).strong().size(16.0));
                    ui.add_space(4.0);
                    for (opt_idx, option) in q.options.iter().enumerate() {
                        let checked = q.selected == Some(opt_idx);
                        if ui.radio(checked, option.as_str()).clicked() && !checked {
                            events.push(QuizEvent::Select {
                                question: q.index,
                                option: opt_idx,
                            });
                        }
                    }
                });
            ui.add_space(8.0);
        }

        ui.add_space(6.0);
        if ui
            .add_sized([200.0, 36.0], Button::new("Submit answers"))
            .clicked()
        {
            events.push(QuizEvent::Submit);
        }
    });
    events
}
