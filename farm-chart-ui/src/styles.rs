//! Page stylesheet. Dark mode is keyed on `html[data-theme="dark"]`.

pub const PAGE_CSS: &str = r#"
:root {
  --bg: #f4f6f8;
  --panel: #ffffff;
  --border: #dde3ea;
  --text: #2c3e50;
  --text-muted: #6c7a89;
  --accent: #27ae60;
  --accent-soft: rgba(39, 174, 96, 0.12);
  --highlight: rgba(41, 128, 185, 0.35);
  --map-bg: #e8f0e6;
}

[data-theme="dark"] {
  --bg: #161b22;
  --panel: #1f262e;
  --border: #30363d;
  --text: #e6edf3;
  --text-muted: #8b949e;
  --accent: #2ecc71;
  --accent-soft: rgba(46, 204, 113, 0.18);
  --highlight: rgba(52, 152, 219, 0.45);
  --map-bg: #243026;
}

* { box-sizing: border-box; }
html, body {
  margin: 0;
  background: var(--bg);
  color: var(--text);
  font-family: system-ui, -apple-system, sans-serif;
}

.app-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 12px 20px;
  background: var(--panel);
  border-bottom: 1px solid var(--border);
}
.app-header h1 { margin: 0; font-size: 20px; }
#theme-toggle {
  background: none;
  border: 1px solid var(--border);
  border-radius: 50%;
  width: 36px;
  height: 36px;
  color: var(--text);
  cursor: pointer;
}

.layout { display: flex; gap: 16px; padding: 16px; }
.sidebar { width: 300px; flex-shrink: 0; display: flex; flex-direction: column; gap: 16px; }
.main { flex: 1; display: flex; flex-direction: column; gap: 16px; min-width: 0; }

.panel {
  background: var(--panel);
  border: 1px solid var(--border);
  border-radius: 8px;
}
.panel-header {
  display: flex;
  justify-content: space-between;
  align-items: center;
  padding: 10px 14px;
  cursor: pointer;
  user-select: none;
}
.panel-header h3 { margin: 0; font-size: 15px; }
.panel-content { padding: 0 14px 14px 14px; }
.panel-content.collapsed { display: none; }

#farm-search {
  width: 100%;
  padding: 8px;
  margin-bottom: 8px;
  border: 1px solid var(--border);
  border-radius: 4px;
  background: var(--bg);
  color: var(--text);
}
.farm-list { list-style: none; margin: 0; padding: 0; }
.farm-list li {
  padding: 8px 10px;
  border-radius: 4px;
  cursor: pointer;
}
.farm-list li:hover { background: var(--accent-soft); }
.farm-list li.selected {
  background: var(--accent-soft);
  border-left: 3px solid var(--accent);
  font-weight: bold;
}

.overview-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 8px; }
.overview-card { padding: 8px; border: 1px solid var(--border); border-radius: 4px; }
.overview-card .label { font-size: 11px; color: var(--text-muted); }
.overview-card .value { font-size: 14px; margin-top: 2px; }

.charts { display: flex; gap: 16px; flex-wrap: wrap; }
.chart-card { flex: 1; min-width: 280px; padding: 14px; }

#map-placeholder {
  position: relative;
  height: 320px;
  background: var(--map-bg);
  border-radius: 8px;
  overflow: hidden;
}
.farm-boundary {
  position: absolute;
  border: 2px dashed var(--accent);
  border-radius: 6px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 12px;
  color: var(--text);
  cursor: pointer;
}
.farm-boundary.highlighted {
  background: var(--highlight);
  border-style: solid;
}
"#;
