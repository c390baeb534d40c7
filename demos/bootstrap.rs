use liveplot_backend::event_loop::AppContext;
use liveplot_backend::get_application;
use liveplot_backend::widgets::prelude::*;
use liveplot_backend::widgets::{Bounds, Window, WindowBounds, WindowOptions, div, px, size};

struct Shell;

impl Render for Shell {
    fn render(
        &mut self,
        _window: &mut Window,
        _cx: &mut liveplot_backend::event_loop::Context<Self>,
    ) -> impl IntoElement {
        div()
    }
}

fn main() {
    let app = match get_application(Some("liveplot bootstrap")) {
        Ok(app) => app,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };
    println!("display backend: {}", app.backend());

    app.run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(480.0), px(320.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| cx.new(|_| Shell)).unwrap();
    });
}
