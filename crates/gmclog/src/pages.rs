/// Upload page shell. The form posts straight to the upload endpoint.
pub const INDEX: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>GMC-300 Geiger Muller Counter Online Log Viewer</title>
        <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
    </head>
    <body>
        <h2>GMC-300 Geiger Muller Counter Online Log Viewer</h2>
        <form action="/logs" method="post" enctype="multipart/form-data">
            <p><label>Data file: <input type="file" name="data" /></label></p>
            <p><label>Flags file (optional): <input type="file" name="flags" /></label></p>
            <p><input type="submit" value="Upload" /></p>
        </form>
    </body>
</html>
"#;

/// Chart page shell. Fetches the payload JSON for its log id and hands it
/// to whatever chart library the page loads; the library is not ours.
pub const VIEW: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>View Log - GMC-300 Geiger Muller Counter Online Log Viewer</title>
        <meta http-equiv="Content-Type" content="text/html; charset=UTF-8" />
    </head>
    <body>
        <h2>GMC-300 Geiger Muller Counter Online Log Viewer</h2>
        <p><a href="/">Upload another file</a></p>
        <div id="chart" style="height: 600px;"></div>
        <div id="error"></div>
        <script type="text/javascript">
            const payloadUrl = location.pathname.replace(/\/view$/, '');
            fetch(payloadUrl)
                .then((response) => {
                    if (!response.ok) {
                        return response.text().then((msg) => { throw new Error(msg); });
                    }
                    return response.json();
                })
                .then((payload) => window.renderChart('chart', payload))
                .catch((err) => {
                    document.getElementById('error').textContent = err.message;
                });
        </script>
    </body>
</html>
"#;
