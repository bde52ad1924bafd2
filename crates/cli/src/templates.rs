//! Embedded project templates.
//!
//! Every file the scaffolder writes is generated from the constants and
//! builders in this module. Files whose contents differ between the plain
//! and the styled variant are builders taking a `styling` flag; everything
//! else is a plain constant.

use atoll_common::COUNTER_START;

pub fn readme(styling: bool) -> String {
    let styling_note = if styling {
        "\nThis project was scaffolded with the twind styling layer; the shared\nconfiguration lives in `utils/twind.ts`.\n"
    } else {
        ""
    };
    format!(
        r#"# Atoll project

### Usage

Start the project:

```
atoll-dev .
```

The counter island lives in `islands/Counter.tsx`, routes live in `routes/`,
and static assets are served from `static/`.
{styling_note}"#
    )
}

pub fn import_map(styling: bool) -> String {
    if styling {
        r#"{
  "imports": {
    "@/": "./",
    "preact": "https://esm.sh/preact@10.11.0",
    "preact/": "https://esm.sh/preact@10.11.0/",
    "preact/hooks": "https://esm.sh/preact@10.11.0/hooks",
    "twind": "https://esm.sh/twind@0.16.17",
    "twind/": "https://esm.sh/twind@0.16.17/"
  }
}
"#
        .to_string()
    } else {
        r#"{
  "imports": {
    "@/": "./",
    "preact": "https://esm.sh/preact@10.11.0",
    "preact/": "https://esm.sh/preact@10.11.0/",
    "preact/hooks": "https://esm.sh/preact@10.11.0/hooks"
  }
}
"#
        .to_string()
    }
}

pub const MANIFEST: &str = r#"// DO NOT EDIT. This file is generated by atoll.
// This file SHOULD be checked into source version control.

import * as $0 from "./routes/api/joke.ts";
import * as $1 from "./routes/index.tsx";
import * as $2 from "./routes/[name].tsx";
import * as $$0 from "./islands/Counter.tsx";

const manifest = {
  routes: {
    "./routes/api/joke.ts": $0,
    "./routes/index.tsx": $1,
    "./routes/[name].tsx": $2,
  },
  islands: {
    "./islands/Counter.tsx": $$0,
  },
  baseUrl: import.meta.url,
};

export default manifest;
"#;

pub fn main_ts(styling: bool) -> String {
    if styling {
        r#"/// <reference no-default-lib="true" />
/// <reference lib="dom" />
/// <reference lib="deno.ns" />

import { start } from "atoll/server.ts";
import manifest from "./fresh.gen.ts";

import { config, setup } from "./utils/twind.ts";
import { virtualSheet } from "twind/sheets";

const sheet = virtualSheet();
sheet.reset();
setup({ ...config, sheet });

await start(manifest, { sheet });
"#
        .to_string()
    } else {
        r#"/// <reference no-default-lib="true" />
/// <reference lib="dom" />
/// <reference lib="deno.ns" />

import { start } from "atoll/server.ts";
import manifest from "./fresh.gen.ts";

await start(manifest);
"#
        .to_string()
    }
}

pub fn counter(styling: bool) -> String {
    let class = if styling { r#" class="font-bold""# } else { "" };
    format!(
        r#"import {{ useState }} from "preact/hooks";

interface CounterProps {{
  start: number;
}}

export default function Counter(props: CounterProps) {{
  const [count, setCount] = useState(props.start);
  return (
    <div>
      <p{class}>{{count}}</p>
      <button onClick={{() => setCount(count - 1)}}>-1</button>
      <button onClick={{() => setCount(count + 1)}}>+1</button>
    </div>
  );
}}
"#
    )
}

pub fn index_route() -> String {
    format!(
        r#"import Counter from "../islands/Counter.tsx";

export default function Home() {{
  return (
    <div>
      <img src="/logo.svg" width="128" height="128" alt="the atoll logo" />
      <Counter start={{{COUNTER_START}}} />
    </div>
  );
}}
"#
    )
}

pub const NAME_ROUTE: &str = r#"import { PageProps } from "atoll/server.ts";

export default function Greet(props: PageProps) {
  return <div>Hello {props.params.name}</div>;
}
"#;

pub const JOKE_API: &str = r#"// Jokes courtesy of https://punsandoneliners.com/randomness/programmer-jokes/
const JOKES = [
  "Why do Java developers often wear glasses? They can't C#.",
  "A SQL query walks into a bar, goes up to two tables and says: can I join you?",
  "Wasn't hard to crack Forrest Gump's password. 1forrest1.",
  "I love pressing the F5 key. It's refreshing.",
  "Called IT support and a chap from Australia came to fix my network connection. I asked: Do you come from a LAN down under?",
  "There are 10 types of people in the world. Those who understand binary and those who don't.",
  "Why are assembly programmers often wet? They work below C level.",
  "My favourite computer based band is the Black IPs.",
  "What programme do you use to predict the music tastes of former US presidential candidates? An Al Gore Rhythm.",
  "An SEO expert walked into a bar, pub, inn, tavern, hostelry, public house.",
];

export const handler = (_req: Request): Response => {
  const randomIndex = Math.floor(Math.random() * JOKES.length);
  const body = JOKES[randomIndex];
  return new Response(body);
};
"#;

pub const LOGO_SVG: &str = r##"<svg width="128" height="128" viewBox="0 0 128 128" fill="none" xmlns="http://www.w3.org/2000/svg">
  <circle cx="64" cy="64" r="48" stroke="#16a34a" stroke-width="10" fill="none" stroke-dasharray="40 14" />
  <circle cx="64" cy="64" r="20" fill="#0ea5e9" />
</svg>
"##;

pub const TWIND_UTIL: &str = r#"import { IS_BROWSER } from "atoll/runtime.ts";
import { Configuration, setup } from "twind";
export * from "twind";

export const config: Configuration = {
  darkMode: "class",
  mode: "silent",
};

if (IS_BROWSER) setup(config);
"#;
