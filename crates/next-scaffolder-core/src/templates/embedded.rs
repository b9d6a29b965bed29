//! Template assets compiled into the binary.
//!
//! Every file under `templates/<family>/<mode>/` is listed here with
//! [`include_bytes!`]. The paths are relative to this file and checked at
//! compile time, so adding a template file means adding a line below.

/// `(path relative to templates/, contents)` for every bundled file.
pub const FILES: &[(&str, &[u8])] = &[
    (
        "app-api/js/README-template.md",
        include_bytes!("../../templates/app-api/js/README-template.md"),
    ),
    (
        "app-api/js/app/[slug]/route.js",
        include_bytes!("../../templates/app-api/js/app/[slug]/route.js"),
    ),
    (
        "app-api/js/app/route.js",
        include_bytes!("../../templates/app-api/js/app/route.js"),
    ),
    (
        "app-api/js/biome.json",
        include_bytes!("../../templates/app-api/js/biome.json"),
    ),
    (
        "app-api/js/eslint.config.mjs",
        include_bytes!("../../templates/app-api/js/eslint.config.mjs"),
    ),
    (
        "app-api/js/gitignore",
        include_bytes!("../../templates/app-api/js/gitignore"),
    ),
    (
        "app-api/js/jsconfig.json",
        include_bytes!("../../templates/app-api/js/jsconfig.json"),
    ),
    (
        "app-api/js/next.config.mjs",
        include_bytes!("../../templates/app-api/js/next.config.mjs"),
    ),
    (
        "app-api/ts/README-template.md",
        include_bytes!("../../templates/app-api/ts/README-template.md"),
    ),
    (
        "app-api/ts/app/[slug]/route.ts",
        include_bytes!("../../templates/app-api/ts/app/[slug]/route.ts"),
    ),
    (
        "app-api/ts/app/route.ts",
        include_bytes!("../../templates/app-api/ts/app/route.ts"),
    ),
    (
        "app-api/ts/biome.json",
        include_bytes!("../../templates/app-api/ts/biome.json"),
    ),
    (
        "app-api/ts/eslint.config.mjs",
        include_bytes!("../../templates/app-api/ts/eslint.config.mjs"),
    ),
    (
        "app-api/ts/gitignore",
        include_bytes!("../../templates/app-api/ts/gitignore"),
    ),
    (
        "app-api/ts/next-env.d.ts",
        include_bytes!("../../templates/app-api/ts/next-env.d.ts"),
    ),
    (
        "app-api/ts/next.config.ts",
        include_bytes!("../../templates/app-api/ts/next.config.ts"),
    ),
    (
        "app-api/ts/tsconfig.json",
        include_bytes!("../../templates/app-api/ts/tsconfig.json"),
    ),
    (
        "app-empty/js/README-template.md",
        include_bytes!("../../templates/app-empty/js/README-template.md"),
    ),
    (
        "app-empty/js/app/favicon.ico",
        include_bytes!("../../templates/app-empty/js/app/favicon.ico"),
    ),
    (
        "app-empty/js/app/globals.css",
        include_bytes!("../../templates/app-empty/js/app/globals.css"),
    ),
    (
        "app-empty/js/app/layout.js",
        include_bytes!("../../templates/app-empty/js/app/layout.js"),
    ),
    (
        "app-empty/js/app/page.js",
        include_bytes!("../../templates/app-empty/js/app/page.js"),
    ),
    (
        "app-empty/js/biome.json",
        include_bytes!("../../templates/app-empty/js/biome.json"),
    ),
    (
        "app-empty/js/eslint.config.mjs",
        include_bytes!("../../templates/app-empty/js/eslint.config.mjs"),
    ),
    (
        "app-empty/js/gitignore",
        include_bytes!("../../templates/app-empty/js/gitignore"),
    ),
    (
        "app-empty/js/jsconfig.json",
        include_bytes!("../../templates/app-empty/js/jsconfig.json"),
    ),
    (
        "app-empty/js/next.config.mjs",
        include_bytes!("../../templates/app-empty/js/next.config.mjs"),
    ),
    (
        "app-empty/ts/README-template.md",
        include_bytes!("../../templates/app-empty/ts/README-template.md"),
    ),
    (
        "app-empty/ts/app/favicon.ico",
        include_bytes!("../../templates/app-empty/ts/app/favicon.ico"),
    ),
    (
        "app-empty/ts/app/globals.css",
        include_bytes!("../../templates/app-empty/ts/app/globals.css"),
    ),
    (
        "app-empty/ts/app/layout.tsx",
        include_bytes!("../../templates/app-empty/ts/app/layout.tsx"),
    ),
    (
        "app-empty/ts/app/page.tsx",
        include_bytes!("../../templates/app-empty/ts/app/page.tsx"),
    ),
    (
        "app-empty/ts/biome.json",
        include_bytes!("../../templates/app-empty/ts/biome.json"),
    ),
    (
        "app-empty/ts/eslint.config.mjs",
        include_bytes!("../../templates/app-empty/ts/eslint.config.mjs"),
    ),
    (
        "app-empty/ts/gitignore",
        include_bytes!("../../templates/app-empty/ts/gitignore"),
    ),
    (
        "app-empty/ts/next-env.d.ts",
        include_bytes!("../../templates/app-empty/ts/next-env.d.ts"),
    ),
    (
        "app-empty/ts/next.config.ts",
        include_bytes!("../../templates/app-empty/ts/next.config.ts"),
    ),
    (
        "app-empty/ts/tsconfig.json",
        include_bytes!("../../templates/app-empty/ts/tsconfig.json"),
    ),
    (
        "app-tw-empty/js/README-template.md",
        include_bytes!("../../templates/app-tw-empty/js/README-template.md"),
    ),
    (
        "app-tw-empty/js/app/favicon.ico",
        include_bytes!("../../templates/app-tw-empty/js/app/favicon.ico"),
    ),
    (
        "app-tw-empty/js/app/globals.css",
        include_bytes!("../../templates/app-tw-empty/js/app/globals.css"),
    ),
    (
        "app-tw-empty/js/app/layout.js",
        include_bytes!("../../templates/app-tw-empty/js/app/layout.js"),
    ),
    (
        "app-tw-empty/js/app/page.js",
        include_bytes!("../../templates/app-tw-empty/js/app/page.js"),
    ),
    (
        "app-tw-empty/js/biome.json",
        include_bytes!("../../templates/app-tw-empty/js/biome.json"),
    ),
    (
        "app-tw-empty/js/eslint.config.mjs",
        include_bytes!("../../templates/app-tw-empty/js/eslint.config.mjs"),
    ),
    (
        "app-tw-empty/js/gitignore",
        include_bytes!("../../templates/app-tw-empty/js/gitignore"),
    ),
    (
        "app-tw-empty/js/jsconfig.json",
        include_bytes!("../../templates/app-tw-empty/js/jsconfig.json"),
    ),
    (
        "app-tw-empty/js/next.config.mjs",
        include_bytes!("../../templates/app-tw-empty/js/next.config.mjs"),
    ),
    (
        "app-tw-empty/js/postcss.config.mjs",
        include_bytes!("../../templates/app-tw-empty/js/postcss.config.mjs"),
    ),
    (
        "app-tw-empty/ts/README-template.md",
        include_bytes!("../../templates/app-tw-empty/ts/README-template.md"),
    ),
    (
        "app-tw-empty/ts/app/favicon.ico",
        include_bytes!("../../templates/app-tw-empty/ts/app/favicon.ico"),
    ),
    (
        "app-tw-empty/ts/app/globals.css",
        include_bytes!("../../templates/app-tw-empty/ts/app/globals.css"),
    ),
    (
        "app-tw-empty/ts/app/layout.tsx",
        include_bytes!("../../templates/app-tw-empty/ts/app/layout.tsx"),
    ),
    (
        "app-tw-empty/ts/app/page.tsx",
        include_bytes!("../../templates/app-tw-empty/ts/app/page.tsx"),
    ),
    (
        "app-tw-empty/ts/biome.json",
        include_bytes!("../../templates/app-tw-empty/ts/biome.json"),
    ),
    (
        "app-tw-empty/ts/eslint.config.mjs",
        include_bytes!("../../templates/app-tw-empty/ts/eslint.config.mjs"),
    ),
    (
        "app-tw-empty/ts/gitignore",
        include_bytes!("../../templates/app-tw-empty/ts/gitignore"),
    ),
    (
        "app-tw-empty/ts/next-env.d.ts",
        include_bytes!("../../templates/app-tw-empty/ts/next-env.d.ts"),
    ),
    (
        "app-tw-empty/ts/next.config.ts",
        include_bytes!("../../templates/app-tw-empty/ts/next.config.ts"),
    ),
    (
        "app-tw-empty/ts/postcss.config.mjs",
        include_bytes!("../../templates/app-tw-empty/ts/postcss.config.mjs"),
    ),
    (
        "app-tw-empty/ts/tsconfig.json",
        include_bytes!("../../templates/app-tw-empty/ts/tsconfig.json"),
    ),
    (
        "app-tw/js/README-template.md",
        include_bytes!("../../templates/app-tw/js/README-template.md"),
    ),
    (
        "app-tw/js/app/favicon.ico",
        include_bytes!("../../templates/app-tw/js/app/favicon.ico"),
    ),
    (
        "app-tw/js/app/globals.css",
        include_bytes!("../../templates/app-tw/js/app/globals.css"),
    ),
    (
        "app-tw/js/app/layout.js",
        include_bytes!("../../templates/app-tw/js/app/layout.js"),
    ),
    (
        "app-tw/js/app/page.js",
        include_bytes!("../../templates/app-tw/js/app/page.js"),
    ),
    (
        "app-tw/js/biome.json",
        include_bytes!("../../templates/app-tw/js/biome.json"),
    ),
    (
        "app-tw/js/eslint.config.mjs",
        include_bytes!("../../templates/app-tw/js/eslint.config.mjs"),
    ),
    (
        "app-tw/js/gitignore",
        include_bytes!("../../templates/app-tw/js/gitignore"),
    ),
    (
        "app-tw/js/jsconfig.json",
        include_bytes!("../../templates/app-tw/js/jsconfig.json"),
    ),
    (
        "app-tw/js/next.config.mjs",
        include_bytes!("../../templates/app-tw/js/next.config.mjs"),
    ),
    (
        "app-tw/js/postcss.config.mjs",
        include_bytes!("../../templates/app-tw/js/postcss.config.mjs"),
    ),
    (
        "app-tw/js/public/next.svg",
        include_bytes!("../../templates/app-tw/js/public/next.svg"),
    ),
    (
        "app-tw/js/public/vercel.svg",
        include_bytes!("../../templates/app-tw/js/public/vercel.svg"),
    ),
    (
        "app-tw/ts/README-template.md",
        include_bytes!("../../templates/app-tw/ts/README-template.md"),
    ),
    (
        "app-tw/ts/app/favicon.ico",
        include_bytes!("../../templates/app-tw/ts/app/favicon.ico"),
    ),
    (
        "app-tw/ts/app/globals.css",
        include_bytes!("../../templates/app-tw/ts/app/globals.css"),
    ),
    (
        "app-tw/ts/app/layout.tsx",
        include_bytes!("../../templates/app-tw/ts/app/layout.tsx"),
    ),
    (
        "app-tw/ts/app/page.tsx",
        include_bytes!("../../templates/app-tw/ts/app/page.tsx"),
    ),
    (
        "app-tw/ts/biome.json",
        include_bytes!("../../templates/app-tw/ts/biome.json"),
    ),
    (
        "app-tw/ts/eslint.config.mjs",
        include_bytes!("../../templates/app-tw/ts/eslint.config.mjs"),
    ),
    (
        "app-tw/ts/gitignore",
        include_bytes!("../../templates/app-tw/ts/gitignore"),
    ),
    (
        "app-tw/ts/next-env.d.ts",
        include_bytes!("../../templates/app-tw/ts/next-env.d.ts"),
    ),
    (
        "app-tw/ts/next.config.ts",
        include_bytes!("../../templates/app-tw/ts/next.config.ts"),
    ),
    (
        "app-tw/ts/postcss.config.mjs",
        include_bytes!("../../templates/app-tw/ts/postcss.config.mjs"),
    ),
    (
        "app-tw/ts/public/next.svg",
        include_bytes!("../../templates/app-tw/ts/public/next.svg"),
    ),
    (
        "app-tw/ts/public/vercel.svg",
        include_bytes!("../../templates/app-tw/ts/public/vercel.svg"),
    ),
    (
        "app-tw/ts/tsconfig.json",
        include_bytes!("../../templates/app-tw/ts/tsconfig.json"),
    ),
    (
        "app/js/README-template.md",
        include_bytes!("../../templates/app/js/README-template.md"),
    ),
    (
        "app/js/app/favicon.ico",
        include_bytes!("../../templates/app/js/app/favicon.ico"),
    ),
    (
        "app/js/app/globals.css",
        include_bytes!("../../templates/app/js/app/globals.css"),
    ),
    (
        "app/js/app/layout.js",
        include_bytes!("../../templates/app/js/app/layout.js"),
    ),
    (
        "app/js/app/page.js",
        include_bytes!("../../templates/app/js/app/page.js"),
    ),
    (
        "app/js/app/page.module.css",
        include_bytes!("../../templates/app/js/app/page.module.css"),
    ),
    (
        "app/js/biome.json",
        include_bytes!("../../templates/app/js/biome.json"),
    ),
    (
        "app/js/eslint.config.mjs",
        include_bytes!("../../templates/app/js/eslint.config.mjs"),
    ),
    (
        "app/js/gitignore",
        include_bytes!("../../templates/app/js/gitignore"),
    ),
    (
        "app/js/jsconfig.json",
        include_bytes!("../../templates/app/js/jsconfig.json"),
    ),
    (
        "app/js/next.config.mjs",
        include_bytes!("../../templates/app/js/next.config.mjs"),
    ),
    (
        "app/js/public/next.svg",
        include_bytes!("../../templates/app/js/public/next.svg"),
    ),
    (
        "app/js/public/vercel.svg",
        include_bytes!("../../templates/app/js/public/vercel.svg"),
    ),
    (
        "app/ts/README-template.md",
        include_bytes!("../../templates/app/ts/README-template.md"),
    ),
    (
        "app/ts/app/favicon.ico",
        include_bytes!("../../templates/app/ts/app/favicon.ico"),
    ),
    (
        "app/ts/app/globals.css",
        include_bytes!("../../templates/app/ts/app/globals.css"),
    ),
    (
        "app/ts/app/layout.tsx",
        include_bytes!("../../templates/app/ts/app/layout.tsx"),
    ),
    (
        "app/ts/app/page.module.css",
        include_bytes!("../../templates/app/ts/app/page.module.css"),
    ),
    (
        "app/ts/app/page.tsx",
        include_bytes!("../../templates/app/ts/app/page.tsx"),
    ),
    (
        "app/ts/biome.json",
        include_bytes!("../../templates/app/ts/biome.json"),
    ),
    (
        "app/ts/eslint.config.mjs",
        include_bytes!("../../templates/app/ts/eslint.config.mjs"),
    ),
    (
        "app/ts/gitignore",
        include_bytes!("../../templates/app/ts/gitignore"),
    ),
    (
        "app/ts/next-env.d.ts",
        include_bytes!("../../templates/app/ts/next-env.d.ts"),
    ),
    (
        "app/ts/next.config.ts",
        include_bytes!("../../templates/app/ts/next.config.ts"),
    ),
    (
        "app/ts/public/next.svg",
        include_bytes!("../../templates/app/ts/public/next.svg"),
    ),
    (
        "app/ts/public/vercel.svg",
        include_bytes!("../../templates/app/ts/public/vercel.svg"),
    ),
    (
        "app/ts/tsconfig.json",
        include_bytes!("../../templates/app/ts/tsconfig.json"),
    ),
];
