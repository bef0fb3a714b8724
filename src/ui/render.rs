use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::showcase::ShowcaseView;
use crate::ui::views::{render_failure, render_loader, render_project_list, render_selector};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = layout_regions(frame.area());
    let showcase = app.showcase();

    frame.render_widget(Header::new(app.endpoint()).widget(), regions.header);
    render_selector(frame, regions.selector, showcase.selected);

    frame.render_widget(Clear, regions.body);
    match showcase.view() {
        ShowcaseView::Loader => render_loader(frame, regions.body, app.spinner_tick()),
        ShowcaseView::ProjectList => render_project_list(
            frame,
            regions.body,
            showcase.visible_items(),
            showcase.highlighted,
        ),
        ShowcaseView::Failure => render_failure(frame, regions.body),
        ShowcaseView::Empty => {}
    }

    let footer = Footer::new(showcase.view());
    frame.render_widget(footer.widget(regions.footer), regions.footer);
}
