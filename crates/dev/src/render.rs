//! HTML rendering for the preview pages.

use atoll_common::COUNTER_START;

/// Inline hydration for the counter island: the display is the island's
/// `<p>`, the two buttons decrement and increment it.
const HYDRATE_JS: &str = r#"(function () {
  var island = document.querySelector("body > div > div");
  var display = island.querySelector("p");
  var buttons = island.querySelectorAll("button");
  var count = Number(display.textContent);
  var render = function () { display.textContent = String(count); };
  buttons[0].addEventListener("click", function () { count -= 1; render(); });
  buttons[1].addEventListener("click", function () { count += 1; render(); });
})();"#;

const BOLD_STYLE: &str = "<style>.font-bold { font-weight: 700; }</style>";

/// The index page: logo, counter island, hydration script.
///
/// The DOM shape is part of the scaffold contract: the counter display sits
/// at `body > div > div > p` and the increment control at
/// `body > div > div > button:nth-child(3)`.
pub fn index_page(styled: bool) -> String {
    let style_block = if styled { BOLD_STYLE } else { "" };
    let class = if styled { r#" class="font-bold""# } else { "" };
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>atoll project</title>
    {style_block}
  </head>
  <body>
    <div>
      <img src="/logo.svg" width="128" height="128" alt="the atoll logo" />
      <div>
        <p{class}>{start}</p>
        <button>-1</button>
        <button>+1</button>
      </div>
    </div>
    <script>
{hydrate}
    </script>
  </body>
</html>
"#,
        style_block = style_block,
        class = class,
        start = COUNTER_START,
        hydrate = HYDRATE_JS,
    )
}

/// The dynamic greeting page backing `routes/[name].tsx`.
pub fn greet_page(name: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>atoll project</title>
  </head>
  <body>
    <div>Hello {}</div>
  </body>
</html>
"#,
        escape(name)
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
