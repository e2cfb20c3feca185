use log::{info, warn};

use crate::config::EditorConfig;
use crate::editor::{Editor, Tool};
use crate::error::FigureResult;
use crate::input::{self, InputHandler};
use crate::panels::{central_panel, tools_panel};
use crate::persistence;
use crate::renderer::Renderer;

/// Storage key of the persisted figure
const FIGURE_KEY: &str = "figure";

pub struct FigureApp {
    editor: Editor,
    renderer: Renderer,
    input_handler: InputHandler,
    export: Option<String>,
}

impl Default for FigureApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl FigureApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: EditorConfig) -> Self {
        let mut app = Self::with_config(config);
        let stored = cc.storage.and_then(|storage| storage.get_string(FIGURE_KEY));
        if let Some(json) = stored {
            match persistence::figure_from_json(&json) {
                Ok(document) => app.editor.replace_document(document),
                Err(err) => warn!("Discarding stored figure: {}", err),
            }
        }
        app
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            renderer: Renderer::new(config.handle_radius),
            editor: Editor::new(config),
            input_handler: InputHandler::new(egui::Rect::NOTHING),
            export: None,
        }
    }

    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.report(|editor| editor.set_tool(tool));
    }

    /// Run an editor operation, logging a rejection instead of failing the frame
    pub fn report(&mut self, op: impl FnOnce(&mut Editor) -> FigureResult<()>) {
        if let Err(err) = op(&mut self.editor) {
            warn!("{}", err);
        }
    }

    pub fn show_export(&mut self) {
        let svg = self.editor.export_svg();
        info!("Exported figure ({} bytes of SVG)", svg.len());
        self.export = Some(svg);
    }

    pub fn hide_export(&mut self) {
        self.export = None;
    }

    pub fn export_text(&self) -> Option<String> {
        self.export.clone()
    }

    /// Route this frame's canvas input into the editor
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        self.input_handler.set_canvas_rect(canvas_rect);
        for event in self.input_handler.process_input(ctx) {
            if let Err(err) = input::dispatch(&mut self.editor, &event) {
                warn!("{:?} rejected: {}", event, err);
            }
        }
    }
}

impl eframe::App for FigureApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match persistence::figure_to_json(self.editor.document()) {
            Ok(json) => storage.set_string(FIGURE_KEY, json),
            Err(err) => warn!("Could not save figure: {}", err),
        }
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
