//! HTML rendering boundary — view models in, markup out.

use chronicare_common::ChartPoint;
use minijinja::{context, Environment};

use crate::controller::AdviceView;

/// Navigation header shared across pages
pub const NAV_HTML: &str = include_str!("../templates/nav.html");
const ADVISOR_HTML: &str = include_str!("../templates/advisor.html");

/// Template environment with HTML auto-escaping (selected by the `.html` names).
pub fn templates() -> Environment<'static> {
    let mut env = Environment::new();
    env.add_template("nav.html", NAV_HTML)
        .expect("nav.html template is valid");
    env.add_template("advisor.html", ADVISOR_HTML)
        .expect("advisor.html template is valid");
    env
}

/// Render the advisor page. `view` is `None` on first load or after a blank
/// submission; `overview` is `None` when the aggregate fetch failed.
pub fn render_advisor_page(
    env: &Environment<'_>,
    input: Option<&str>,
    view: Option<&AdviceView>,
    overview: Option<&[ChartPoint]>,
) -> Result<String, minijinja::Error> {
    let chart_visible = view.map(AdviceView::chart_visible).unwrap_or(false);
    env.get_template("advisor.html")?.render(context! {
        input => input.unwrap_or_default(),
        view => view,
        message => view.and_then(AdviceView::message),
        chart_visible => chart_visible,
        overview => overview,
    })
}
