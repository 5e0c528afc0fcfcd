use crate::parse::{display_timestamp, Entry};

const HEADER: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Log Report</title>
<style>
  body { font-family: Arial, sans-serif; margin: 20px; }
  #searchBox { margin-bottom: 20px; padding: 8px; width: 300px; font-size: 16px; }
  table { border-collapse: collapse; width: 100%; }
  th, td { border: 1px solid #ccc; padding: 8px; text-align: left; }
  th { background-color: #f2f2f2; }
  tr:nth-child(even) { background-color: #f9f9f9; }
  .DEBUG { color: #007bff; }
  .INFO { color: #28a745; }
  .WARNING { color: #ffc107; }
  .ERROR { color: #dc3545; }
</style>
<script>
function filterLogs() {
    var filter = document.getElementById("searchBox").value.toLowerCase();
    var rows = document.getElementById("logTable").getElementsByTagName("tr");
    for (var i = 1; i < rows.length; i++) {
        var cells = rows[i].getElementsByTagName("td");
        var matches = false;
        for (var j = 0; j < cells.length; j++) {
            var text = cells[j].textContent || cells[j].innerText;
            if (text.toLowerCase().indexOf(filter) > -1) {
                matches = true;
                break;
            }
        }
        rows[i].style.display = matches ? "" : "none";
    }
}
</script>
</head>
<body>
<h1>Log Report</h1>
<input type="text" id="searchBox" onkeyup="filterLogs()" placeholder="Search logs...">
<table id="logTable">
  <thead>
    <tr>
      <th>Timestamp</th>
      <th>Level</th>
      <th>Message</th>
    </tr>
  </thead>
  <tbody>
"#;

const FOOTER: &str = r#"  </tbody>
</table>
</body>
</html>
"#;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

pub fn render(entries: &[Entry]) -> String {
    let mut html = String::from(HEADER);

    for entry in entries {
        let level = escape(&entry.level);
        html.push_str(&format!(
            "    <tr>\n      <td>{}</td>\n      <td class=\"{}\">{}</td>\n      <td>{}</td>\n    </tr>\n",
            escape(&display_timestamp(&entry.timestamp)),
            level,
            level,
            escape(&entry.message),
        ));
    }

    html.push_str(FOOTER);
    html
}
