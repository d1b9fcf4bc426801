use floodmap::{
    data::image_meta,
    input::events::HintKind,
    FrameClock, MapDataset, MapPoint, MapView, Point, Size, TouchPoint, ViewportConfig,
};

/// Standalone flood map viewer
///
/// Usage: `floodmap-app [map-image] [dataset.json] [config.json]`
fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let image = args.next();
    let dataset = match args.next() {
        Some(path) => MapDataset::from_path(path)?,
        None => MapDataset::campus().clone(),
    };
    let config = match args.next() {
        Some(path) => ViewportConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ViewportConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([520.0, 900.0])
            .with_title("Floodmap - Campus Flood Advisory"),
        ..Default::default()
    };

    eframe::run_native(
        "floodmap-app",
        options,
        Box::new(move |_cc| Box::new(FloodmapApp::new(dataset, config, image))),
    )
    .map_err(|e| anyhow::anyhow!("viewer failed: {e}"))?;

    Ok(())
}

const MOUSE_TOUCH_ID: u64 = 0;

struct FloodmapApp {
    view: MapView,
    clock: FrameClock,
}

impl FloodmapApp {
    fn new(dataset: MapDataset, config: ViewportConfig, image: Option<String>) -> Self {
        let advisory = dataset.advisories.first().cloned().unwrap_or_default();
        let mut view = MapView::new(dataset, advisory, config, Size::new(390.0, 844.0));

        if let Some(path) = image {
            match image_meta::natural_size(&path) {
                Ok(size) => view.set_content_natural_size(size.width, size.height),
                Err(e) => log::warn!("could not read {path}: {e}"),
            }
        }

        Self {
            view,
            clock: FrameClock::new(),
        }
    }

    fn advisory_picker(&mut self, ui: &mut egui::Ui) {
        ui.heading("Advisory");
        ui.separator();

        let advisories = self.view.dataset().advisories.clone();
        for advisory in advisories {
            let selected = self.view.advisory() == advisory;
            if ui.selectable_label(selected, advisory.as_str()).clicked() {
                self.view.set_advisory(advisory);
            }
        }

        ui.separator();
        ui.heading("Regions");
        let regions: Vec<_> = self
            .view
            .dataset()
            .regions
            .iter()
            .map(|region| (region.id.clone(), region.label.clone()))
            .collect();
        for (id, label) in regions {
            if ui.button(label).clicked() {
                self.view.tap_region(&id);
            }
        }

        ui.separator();
        let t = self.view.controller().transform();
        ui.label(format!("Scale: {:.2}", t.scale));
        ui.label(format!("Offset: {:.1}, {:.1}", t.offset.x, t.offset.y));
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Center").clicked() {
                self.view.confirm_center();
            }
            if ui.button("+").clicked() {
                self.view.zoom_in();
            }
            if ui.button("-").clicked() {
                self.view.zoom_out();
            }
            let at_rest = self.view.controller().transform().is_identity();
            if ui.add_enabled(!at_rest, egui::Button::new("Reset")).clicked() {
                self.view.reset_view();
            }
        });

        if self.view.hint_visible() {
            let text = match self.view.hint_kind() {
                Some(HintKind::TapSuppressed) => "Tap Center before selecting a gate",
                _ => "Move the map, then tap Center to select gates",
            };
            ui.colored_label(egui::Color32::from_rgb(200, 120, 0), text);
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        self.view.layout(rect.width() as f64, rect.height() as f64);

        let local = |pos: egui::Pos2| Point::new((pos.x - rect.min.x) as f64, (pos.y - rect.min.y) as f64);
        let screen = |point: Point| egui::pos2(rect.min.x + point.x as f32, rect.min.y + point.y as f32);

        // Mouse drags stand in for a single finger
        if let Some(pos) = response.interact_pointer_pos() {
            let touch = [TouchPoint {
                id: MOUSE_TOUCH_ID,
                position: local(pos),
            }];
            if response.drag_started() {
                self.view.touch_down(&touch);
            } else if response.dragged() {
                self.view.touch_move(&touch);
            }
        }
        if response.drag_released() {
            self.view.touch_up(&[]);
        }

        let zoom = ui.input(|i| i.zoom_delta());
        if response.hovered() && zoom > 1.0 {
            self.view.zoom_in();
        } else if response.hovered() && zoom < 1.0 {
            self.view.zoom_out();
        }

        if response.clicked() || response.secondary_clicked() {
            let hit = response
                .interact_pointer_pos()
                .and_then(|pos| self.view.point_at(&local(pos)))
                .map(|point| point.id.clone());
            match hit {
                Some(id) if response.secondary_clicked() => {
                    self.view.long_press_point(&id);
                }
                Some(id) => {
                    self.view.tap_point(&id);
                }
                None => {
                    if let Some(pos) = response.interact_pointer_pos() {
                        let t = self.view.transform();
                        let layer = local(pos).subtract(&t.offset);
                        self.view.debug_coordinate(&layer);
                    }
                }
            }
        }

        let t = self.view.transform();
        let viewport = self.view.controller().viewport();
        let rendered = viewport.rendered_size();
        let origin = screen(t.offset);
        let content = egui::Rect::from_min_size(
            origin,
            egui::vec2(
                (rendered.width * t.scale) as f32,
                (rendered.height * t.scale) as f32,
            ),
        );

        painter.rect_filled(rect, 0.0, egui::Color32::from_gray(30));
        painter.rect_filled(content, 0.0, egui::Color32::from_rgb(214, 226, 210));
        painter.rect_stroke(content, 0.0, egui::Stroke::new(1.0, egui::Color32::DARK_GRAY));

        let to_screen = |x: f64, y: f64| {
            let layer = viewport.normalized_to_content(&Point::new(x, y));
            screen(viewport.content_to_viewport(&layer, &t))
        };

        for zone in &self.view.dataset().zones {
            painter.text(
                to_screen(zone.x, zone.y),
                egui::Align2::CENTER_CENTER,
                &zone.label,
                egui::FontId::proportional((18.0 * t.scale) as f32),
                egui::Color32::from_rgb(40, 70, 120),
            );
        }

        for point in &self.view.dataset().points {
            self.draw_marker(&painter, point, screen(self.view.marker_position(point)), t.scale);
        }
    }

    fn draw_marker(&self, painter: &egui::Painter, point: &MapPoint, center: egui::Pos2, scale: f64) {
        let level = self.view.dataset().level_for(self.view.advisory(), &point.id);
        let color = match level {
            Some("Half-tire") => egui::Color32::from_rgb(200, 40, 40),
            Some("Gutter-deep") => egui::Color32::from_rgb(230, 140, 20),
            Some(_) => egui::Color32::from_rgb(220, 200, 40),
            None => egui::Color32::GRAY,
        };
        painter.circle_filled(center, (10.0 * scale) as f32, color);
        painter.text(
            center + egui::vec2(0.0, (16.0 * scale) as f32),
            egui::Align2::CENTER_TOP,
            point.short_label(),
            egui::FontId::proportional(12.0),
            egui::Color32::BLACK,
        );
    }

    fn selection_window(&mut self, ctx: &egui::Context) {
        let Some(selection) = self.view.selection().cloned() else {
            return;
        };

        let mut close = false;
        egui::Window::new(selection.name.clone())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -24.0])
            .show(ctx, |ui| {
                ui.label(format!("Advisory: {}", self.view.advisory()));
                ui.label(format!("Expected flood level: {}", selection.level_text()));
                close = ui.button("Close").clicked();
            });

        if close {
            self.view.close_selection();
        }
    }
}

impl eframe::App for FloodmapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let delta = self.clock.tick();

        egui::SidePanel::left("advisory_panel")
            .resizable(false)
            .show(ctx, |ui| self.advisory_picker(ui));

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));

        self.selection_window(ctx);

        if self.view.tick(delta) || self.view.is_animating() || self.view.hint_visible() {
            ctx.request_repaint();
        }
    }
}
