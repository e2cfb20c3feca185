use crate::FigureApp;

pub fn central_panel(app: &mut FigureApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let view = app.editor().view_box();
        ui.label(format!(
            "{} shapes | {} | view {:.0}×{:.0}",
            app.editor().document().len(),
            app.editor().state().name(),
            view.width(),
            view.height()
        ));

        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click_and_drag());
        let canvas_rect = response.rect;

        app.handle_input(ctx, canvas_rect);
        app.renderer().render(&painter, canvas_rect, app.editor());
    });

    if let Some(svg) = app.export_text() {
        let mut open = true;
        egui::Window::new("SVG export")
            .open(&mut open)
            .default_width(480.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut text = svg.as_str();
                    ui.add(egui::TextEdit::multiline(&mut text).code_editor().desired_width(f32::INFINITY));
                });
                if ui.button("Copy").clicked() {
                    ctx.copy_text(svg.clone());
                }
            });
        if !open {
            app.hide_export();
        }
    }
}
