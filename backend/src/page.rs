/// The one document the server hands out. The widget itself is the wasm
/// bundle under `/pkg/`, which mounts into `<body>`; that bundle is the only
/// thing the page fetches after it loads.
pub const INDEX: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Slope-Intercept Learner</title>
    <style>
        body { font-family: sans-serif; }
        #graph { border: 1px solid #333; background: #fafafa; }
        .input-row { margin: 10px 0; }
        .correct { color: green; }
        .incorrect { color: red; }
    </style>
    <script type="module">
        import init from '/pkg/slope-ui.js';
        init();
    </script>
</head>
<body></body>
</html>
"#;
