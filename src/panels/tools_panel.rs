use crate::FigureApp;
use crate::editor::Tool;
use crate::shape::style::{FILL_COLORS, FONT_SIZES, OPACITIES, STROKE_COLORS, STROKE_WIDTHS};
use crate::shape::{DashPattern, ShapeKind, StyleChange};

pub fn tools_panel(app: &mut FigureApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            let busy = !app.editor().state().is_idle();

            ui.heading("Tools");
            let active = app.editor().tool();
            ui.add_enabled_ui(!busy, |ui| {
                if ui.selectable_label(active == Tool::Select, "Select").clicked() {
                    app.set_tool(Tool::Select);
                }
                egui::Grid::new("shape_kinds").num_columns(2).show(ui, |ui| {
                    for (i, kind) in ShapeKind::ALL.into_iter().enumerate() {
                        let tool = Tool::Draw(kind);
                        if ui.selectable_label(active == tool, kind.name()).clicked() {
                            app.set_tool(tool);
                        }
                        if i % 2 == 1 {
                            ui.end_row();
                        }
                    }
                });
            });

            ui.horizontal(|ui| {
                ui.label("Text:");
                let mut text = app.editor().text_input().to_owned();
                if ui.text_edit_singleline(&mut text).changed() {
                    app.editor_mut().set_text_input(text);
                }
            });

            ui.separator();
            style_controls(app, ui);
            ui.separator();

            ui.horizontal(|ui| {
                let history = app.editor().history();
                let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

                if ui.add_enabled(can_undo && !busy, egui::Button::new("Undo")).clicked() {
                    app.report(|editor| editor.undo());
                }
                if ui.add_enabled(can_redo && !busy, egui::Button::new("Redo")).clicked() {
                    app.report(|editor| editor.redo());
                }
                let has_selection = app.editor().selection().is_some();
                if ui.add_enabled(has_selection && !busy, egui::Button::new("Delete")).clicked() {
                    app.report(|editor| editor.delete_selected().map(|_| ()));
                }
            });

            ui.horizontal(|ui| {
                if ui.button("Export SVG").clicked() {
                    app.show_export();
                }
                if ui.button("Clear").clicked() {
                    app.editor_mut().replace_document(Default::default());
                }
            });

            ui.separator();
            let history = app.editor().history();
            ui.label(format!("Undo stack size: {}", history.undo_stack().len()));
            ui.label(format!("Redo stack size: {}", history.redo_stack().len()));
            for command in history.undo_stack().iter().rev().take(10) {
                ui.label(command.name());
            }
        });
}

fn style_controls(app: &mut FigureApp, ui: &mut egui::Ui) {
    let Some(selected) = app.editor().selected_shape() else {
        ui.label("Select a shape to edit its style.");
        return;
    };
    let style = selected.style;
    let font_size = selected.text().map(|text| text.font_size);

    ui.heading("Style");
    let mut change = None;

    ui.horizontal(|ui| {
        ui.label("Stroke:");
        for color in STROKE_COLORS {
            if swatch(ui, color, style.stroke_color == color) {
                change = Some(StyleChange::StrokeColor(color));
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Fill:");
        for color in FILL_COLORS {
            if swatch(ui, color, style.fill == color) {
                change = Some(StyleChange::Fill(color));
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Width:");
        for width in STROKE_WIDTHS {
            if ui.selectable_label(style.stroke_width == width, width.to_string()).clicked() {
                change = Some(StyleChange::StrokeWidth(width));
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Dash:");
        for dash in DashPattern::ALL {
            if ui.selectable_label(style.dash == dash, dash.label()).clicked() {
                change = Some(StyleChange::Dash(dash));
            }
        }
    });
    ui.horizontal(|ui| {
        ui.label("Opacity:");
        for opacity in OPACITIES {
            if ui.selectable_label(style.opacity == opacity, format!("{opacity}")).clicked() {
                change = Some(StyleChange::Opacity(opacity));
            }
        }
    });
    if let Some(current) = font_size {
        ui.horizontal(|ui| {
            ui.label("Font:");
            for size in FONT_SIZES {
                if ui.selectable_label(current == size, size.to_string()).clicked() {
                    change = Some(StyleChange::FontSize(size));
                }
            }
        });
        if ui.button("Use text field as content").clicked() {
            let content = app.editor().text_input().to_owned();
            app.report(|editor| editor.set_text(content));
        }
    }

    if let Some(change) = change {
        app.report(|editor| editor.apply_style(change));
    }
}

fn swatch(ui: &mut egui::Ui, color: egui::Color32, selected: bool) -> bool {
    let size = egui::vec2(16.0, 16.0);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    ui.painter().rect_filled(rect, 2.0, color);
    let outline = if selected { egui::Color32::from_rgb(30, 120, 255) } else { egui::Color32::GRAY };
    ui.painter().rect_stroke(rect, 2.0, egui::Stroke::new(if selected { 2.0 } else { 1.0 }, outline));
    response.clicked()
}
