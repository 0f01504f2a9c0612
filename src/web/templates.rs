pub const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>🧠🩺 Assistant Médical AI</title>
    <link href="https://fonts.googleapis.com/css2?family=Poppins:wght@400;600;700&display=swap" rel="stylesheet">
    <style>
        body {
            margin: 0;
            min-height: 100vh;
            font-family: 'Poppins', sans-serif;
            background: radial-gradient(circle at top, #1cb5e0, #000046);
            color: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .card {
            background: rgba(255,255,255,0.08);
            backdrop-filter: blur(20px);
            border-radius: 25px;
            padding: 40px;
            width: 90%;
            max-width: 850px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.4);
            animation: fadeUp 1s ease;
        }
        h1 { text-align: center; font-size: 2.8em; margin-bottom: 10px; }
        p { text-align: center; opacity: 0.9; margin-bottom: 30px; }
        textarea {
            width: 100%;
            height: 180px;
            border-radius: 15px;
            border: none;
            padding: 18px;
            font-size: 1em;
            resize: none;
            outline: none;
            box-sizing: border-box;
        }
        button {
            margin-top: 25px;
            width: 100%;
            padding: 16px;
            font-size: 1.2em;
            font-weight: 700;
            border: none;
            border-radius: 18px;
            background: linear-gradient(90deg, #ffcc33, #ff9900);
            cursor: pointer;
            transition: transform 0.2s, box-shadow 0.2s;
            box-shadow: 0 10px 25px rgba(0,0,0,0.3);
        }
        button:hover {
            transform: scale(1.03);
            box-shadow: 0 15px 35px rgba(0,0,0,0.4);
        }
        .loading {
            display: none;
            text-align: center;
            margin-top: 20px;
            font-size: 1.2em;
            animation: pulse 1.2s infinite;
        }
        footer { margin-top: 30px; text-align: center; font-size: 0.9em; opacity: 0.8; }
        @keyframes fadeUp {
            from { opacity: 0; transform: translateY(30px); }
            to { opacity: 1; transform: translateY(0); }
        }
        @keyframes pulse {
            0% { opacity: 0.4; }
            50% { opacity: 1; }
            100% { opacity: 0.4; }
        }
    </style>
</head>
<body>
    <div class="card">
        <h1>🧠🩺 Assistant Médical AI</h1>
        <p>Analyse intelligente des cas cliniques – aide à la décision médicale</p>

        <form action="/analyze/" method="post" onsubmit="showLoading()">
            <textarea name="case_text" placeholder="Ex : Patient de 52 ans avec ictère, douleurs hépatiques..." required></textarea>
            <button type="submit">Analyser 🤖🩺</button>
        </form>

        <div class="loading" id="loading">
            ⏳ قيد المعالجة... <br> 🤖🩺
        </div>

        <footer>
            Développé en Algérie 🇩🇿 – Assistant médical intelligent
        </footer>
    </div>

    <script>
        function showLoading() {
            document.getElementById("loading").style.display = "block";
        }
    </script>
</body>
</html>
"#;

const RESULT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="fr">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Résultat 🧠🩺</title>
    <link href="https://fonts.googleapis.com/css2?family=Poppins:wght@400;600;700&display=swap" rel="stylesheet">
    <style>
        body {
            margin: 0;
            min-height: 100vh;
            font-family: 'Poppins', sans-serif;
            background: radial-gradient(circle at top, #1cb5e0, #000046);
            color: #fff;
            display: flex;
            align-items: center;
            justify-content: center;
        }
        .box {
            background: rgba(255,255,255,0.08);
            backdrop-filter: blur(20px);
            border-radius: 25px;
            padding: 40px;
            width: 90%;
            max-width: 900px;
            box-shadow: 0 20px 60px rgba(0,0,0,0.4);
        }
        .result { white-space: pre-wrap; }
        a { display: inline-block; margin-top: 25px; color: #ffcc33; font-weight: 600; text-decoration: none; }
    </style>
</head>
<body>
    <div class="box">
        <h1>🧠🩺 Résultat de l'analyse</h1>
        <div class="result">"#;

const RESULT_TAIL: &str = r#"</div>
        <a href="/">⬅️ Nouvelle analyse</a>
    </div>
</body>
</html>
"#;

/// Text content only needs `& < >` escaped; quotes and apostrophes stay as-is.
pub fn render_result(text: &str) -> String {
    let escaped = html_escape::encode_text(text);
    let mut page = String::with_capacity(RESULT_HEAD.len() + escaped.len() + RESULT_TAIL.len());
    page.push_str(RESULT_HEAD);
    page.push_str(&escaped);
    page.push_str(RESULT_TAIL);
    page
}
