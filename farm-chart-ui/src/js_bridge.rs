//! Typed wrappers around Chart.js interop via `js_sys::eval()`.
//!
//! The chart functions live in `assets/js/farm-charts.js`, loaded at runtime
//! once the `Chart` global from the CDN script exists. They are evaluated as
//! globals (no ES modules) and exposed via `window.*`.

static FARM_CHARTS_JS: &str = include_str!("../assets/js/farm-charts.js");

/// Canvas id of the yield bar chart.
pub const YIELD_CANVAS_ID: &str = "yieldChart";
/// Canvas id of the damage doughnut chart.
pub const DAMAGE_CANVAS_ID: &str = "damageChart";

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('Farm monitor JS call failed:', e); }}",
        code
    );
    let _ = js_sys::eval(&wrapped);
}

/// Initialize chart scripts with a wait-for-Chart.js polling loop.
///
/// The script is stored on `window` and evaluated at global scope with an
/// indirect eval once `Chart` is defined, so its `function` declarations
/// are not block-scoped inside the interval callback.
pub fn init_charts() {
    let store_js = format!(
        "window.__farmChartScripts = {};",
        serde_json::to_string(FARM_CHARTS_JS).unwrap_or_default()
    );
    let _ = js_sys::eval(&store_js);

    let init_js = r#"
        (function() {
            if (window.__farmChartsReady) { return; }
            var waitForChart = setInterval(function() {
                if (typeof Chart !== 'undefined') {
                    clearInterval(waitForChart);
                    (0, eval)(window.__farmChartScripts);
                    delete window.__farmChartScripts;
                    if (typeof renderFarmChart !== 'undefined') window.renderFarmChart = renderFarmChart;
                    if (typeof destroyFarmChart !== 'undefined') window.destroyFarmChart = destroyFarmChart;
                    window.__farmChartsReady = true;
                    console.log('Farm monitor charts initialized');
                }
            }, 100);
        })();
    "#;
    let _ = js_sys::eval(init_js);
}

/// Draw or redraw a chart from a Chart.js `{type, data, options}` config.
///
/// The first call for a canvas constructs the chart. Later calls replace
/// its `data` and call `update()`. Polls until Chart.js, the chart scripts
/// and the canvas are all available.
pub fn render_chart(canvas_id: &str, config: &serde_json::Value) {
    // JSON is a valid JS expression, so the config is embedded as a literal.
    let config_literal = config.to_string();
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__farmChartsReady &&
                    typeof window.renderFarmChart !== 'undefined' &&
                    document.getElementById('{canvas_id}')) {{
                    clearInterval(poll);
                    try {{
                        window.renderFarmChart('{canvas_id}', {config_literal});
                    }} catch(e) {{ console.error('[Farm] renderFarmChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Destroy the chart drawn on the given canvas, if any.
pub fn destroy_chart(canvas_id: &str) {
    call_js(&format!(
        "if (window.destroyFarmChart) {{ window.destroyFarmChart('{}'); }}",
        canvas_id
    ));
}
