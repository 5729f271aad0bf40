use log::info;
use roster_business::{FetchUsersCommand, apply_action};

use crate::{state::State, widgets};

pub struct RosterApp {
    pub state: State,
    mounted: bool,
}

impl RosterApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            mounted: false,
        }
    }

    /// First frame: wire repaints to the state context and start the users fetch.
    fn mount(&mut self, ctx: &egui::Context) {
        if self.mounted {
            return;
        }
        self.mounted = true;

        egui_extras::install_image_loaders(ctx);

        let egui_ctx = ctx.clone();
        self.state.ctx.set_waker(move || egui_ctx.request_repaint());

        info!("Mounting employees table");
        self.state.ctx.dispatch::<FetchUsersCommand>();
    }
}

impl eframe::App for RosterApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.mount(ctx);

        // Apply fetch results and settle the table pipeline before drawing.
        self.state.ctx.run_all_dirty();

        let state_ctx = &self.state.ctx;
        let mut actions = Vec::new();

        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("Employees");
            actions.extend(widgets::filter_bar(state_ctx, ui));
            ui.add_space(4.0);
        });

        egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
            actions.extend(widgets::pagination_bar(state_ctx, ui));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            actions.extend(widgets::users_table(state_ctx, ui));
        });

        if !actions.is_empty() {
            for action in actions {
                apply_action(&mut self.state.ctx, action);
            }
            self.state.ctx.run_all_dirty();
            ctx.request_repaint();
        }
    }
}
