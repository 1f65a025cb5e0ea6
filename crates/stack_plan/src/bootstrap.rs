//! Primary project-creation step.
//!
//! Bootstrap selection is an ordered table of `(predicate, builder)`
//! strategies evaluated top to bottom, first match wins: meta-framework
//! scaffolding CLIs, then SPA template generators, then backend generators,
//! then the generic `mkdir && cd && init` fallback.
//!
//! Each builder returns a [`Capabilities`] record describing what the
//! scaffolding CLI already set up, built from the same flags as the command
//! text. Later stages consult the record instead of searching the command
//! string.

use std::collections::BTreeSet;

use serde::Serialize;
use tracing::debug;

use crate::context::PlanContext;
use crate::layout;
use crate::options::PlanProfile;
use crate::step::CommandStep;
use crate::tokens::{self, TANSTACK_CLI};

/// What a bootstrap command already took care of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Capabilities {
    /// The scaffold installs `typescript`.
    pub includes_typescript: bool,
    /// The scaffold installs `@types/node`.
    pub includes_types_node: bool,
    /// Selection tokens whose packages and setup the scaffold handles.
    pub subsumed: BTreeSet<&'static str>,
    /// The scaffold decides on repository initialization itself.
    pub manages_git: bool,
}

impl Capabilities {
    pub fn none() -> Self {
        Self::default()
    }

    /// TypeScript and `@types/node` both come with the scaffold.
    pub fn typescript() -> Self {
        Self {
            includes_typescript: true,
            includes_types_node: true,
            ..Self::default()
        }
    }

    pub fn subsumes(&self, token: &str) -> bool {
        self.subsumed.contains(token)
    }

    fn subsume(&mut self, token: &'static str) {
        self.subsumed.insert(token);
    }
}

/// The selected bootstrap step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bootstrap {
    /// Id of the strategy that produced this bootstrap.
    pub strategy: &'static str,
    pub step: CommandStep,
    /// False when the command already created the directory and entered it.
    pub needs_separate_navigate: bool,
    pub capabilities: Capabilities,
}

impl Bootstrap {
    fn scaffold(strategy: &'static str, step: CommandStep, capabilities: Capabilities) -> Self {
        Self {
            strategy,
            step,
            needs_separate_navigate: true,
            capabilities,
        }
    }

    fn in_place(strategy: &'static str, step: CommandStep) -> Self {
        Self {
            strategy,
            step,
            needs_separate_navigate: false,
            capabilities: Capabilities::none(),
        }
    }
}

/// One entry of the bootstrap table.
pub struct BootstrapStrategy {
    pub id: &'static str,
    pub matches: fn(&PlanContext<'_>) -> bool,
    pub build: fn(&PlanContext<'_>) -> Bootstrap,
}

/// Bootstrap table in priority order. The fallback is not part of it.
pub static STRATEGIES: &[BootstrapStrategy] = &[
    BootstrapStrategy {
        id: "nextjs",
        matches: |ctx| ctx.has("nextjs"),
        build: next_app,
    },
    BootstrapStrategy {
        id: "nuxt",
        matches: |ctx| ctx.has("nuxt"),
        build: nuxt,
    },
    BootstrapStrategy {
        id: "astro",
        matches: |ctx| ctx.has("astro"),
        build: astro,
    },
    BootstrapStrategy {
        id: "svelte",
        matches: |ctx| ctx.has("svelte"),
        build: svelte,
    },
    BootstrapStrategy {
        id: "solid",
        matches: |ctx| ctx.has("solid"),
        build: solid,
    },
    BootstrapStrategy {
        id: "tanstack-start",
        matches: |ctx| ctx.has("tanstack-start"),
        build: tanstack_start,
    },
    BootstrapStrategy {
        id: "tanstack-router",
        matches: |ctx| ctx.has("tanstack-router"),
        build: |ctx| vite_react(ctx, "tanstack-router", "TanStack Router"),
    },
    BootstrapStrategy {
        id: "react-router",
        matches: |ctx| ctx.has("react-router"),
        build: |ctx| vite_react(ctx, "react-router", "React Router"),
    },
    BootstrapStrategy {
        id: "expo",
        matches: |ctx| ctx.has_any(tokens::EXPO),
        build: expo,
    },
    BootstrapStrategy {
        id: "hono",
        matches: |ctx| ctx.has("hono"),
        build: hono,
    },
    BootstrapStrategy {
        id: "elysia",
        matches: |ctx| ctx.has("elysia"),
        build: elysia,
    },
    BootstrapStrategy {
        id: "node-server",
        matches: |ctx| ctx.has_any(&["express", "fastify"]),
        build: node_server,
    },
];

/// Delegated-profile entry, evaluated right before `tanstack-start`.
pub static TANSTACK_CLI_STRATEGY: BootstrapStrategy = BootstrapStrategy {
    id: "tanstack",
    matches: |ctx| ctx.has(TANSTACK_CLI),
    build: tanstack_cli,
};

/// Always-matching last resort.
pub static FALLBACK: BootstrapStrategy = BootstrapStrategy {
    id: "generic",
    matches: |_| true,
    build: generic,
};

/// Ordered strategies for a profile, fallback excluded.
pub fn strategies(profile: PlanProfile) -> Vec<&'static BootstrapStrategy> {
    let mut ordered = Vec::with_capacity(STRATEGIES.len() + 1);
    for strategy in STRATEGIES {
        if profile == PlanProfile::Delegated && strategy.id == "tanstack-start" {
            ordered.push(&TANSTACK_CLI_STRATEGY);
        }
        ordered.push(strategy);
    }
    ordered
}

/// Pick and build the bootstrap step.
pub fn select_bootstrap(ctx: &PlanContext<'_>) -> Bootstrap {
    let strategy = strategies(ctx.options.profile)
        .into_iter()
        .find(|s| (s.matches)(ctx))
        .unwrap_or(&FALLBACK);

    debug!("Bootstrap strategy: {}", strategy.id);
    (strategy.build)(ctx)
}

/// The bare bootstrap command, for the quick-copy affordance.
pub fn select_single_command(ctx: &PlanContext<'_>) -> String {
    select_bootstrap(ctx).step.command
}

fn next_app(ctx: &PlanContext<'_>) -> Bootstrap {
    let name = ctx.project_name;
    let creator = if ctx.pm.is_npm() {
        "npx create-next-app@latest".to_string()
    } else {
        ctx.pm.create("next-app@latest")
    };

    let mut caps = Capabilities::none();
    let mut flags = Vec::with_capacity(3);

    if ctx.has_typescript() {
        flags.push("--typescript");
        caps.includes_typescript = true;
        caps.includes_types_node = true;
    } else {
        flags.push("--js");
    }

    if ctx.has("tailwindcss") {
        flags.push("--tailwind");
        caps.subsume("tailwindcss");
    } else {
        flags.push("--no-tailwind");
    }

    if ctx.has("eslint") {
        flags.push("--eslint");
        caps.subsume("eslint");
    } else if ctx.has("biome") {
        flags.push("--biome");
        caps.subsume("biome");
    } else {
        flags.push("--no-eslint");
    }

    Bootstrap::scaffold(
        "nextjs",
        CommandStep::new(
            "Create Next.js project",
            format!("{} {} {}", creator, name, flags.join(" ")),
        )
        .with_description("Initialize a new Next.js project"),
        caps,
    )
}

fn nuxt(ctx: &PlanContext<'_>) -> Bootstrap {
    Bootstrap::scaffold(
        "nuxt",
        CommandStep::new(
            "Create Nuxt project",
            ctx.pm.exec(&format!("nuxi@latest init {}", ctx.project_name)),
        )
        .with_description("Initialize a new Nuxt 3 project"),
        Capabilities::typescript(),
    )
}

fn astro(ctx: &PlanContext<'_>) -> Bootstrap {
    Bootstrap::scaffold(
        "astro",
        CommandStep::new(
            "Create Astro project",
            ctx.pm.create(&format!("astro@latest {}", ctx.project_name)),
        )
        .with_description("Initialize a new Astro project"),
        Capabilities::typescript(),
    )
}

fn svelte(ctx: &PlanContext<'_>) -> Bootstrap {
    // sv ships TypeScript but not @types/node
    let caps = Capabilities {
        includes_typescript: true,
        ..Capabilities::none()
    };
    Bootstrap::scaffold(
        "svelte",
        CommandStep::new(
            "Create Svelte project",
            ctx.pm.exec(&format!("sv create {}", ctx.project_name)),
        )
        .with_description("Initialize a new SvelteKit project"),
        caps,
    )
}

fn solid(ctx: &PlanContext<'_>) -> Bootstrap {
    let ts = ctx.has_typescript();
    let (template, description) = if ts {
        ("ts", "Initialize a new Solid project with TypeScript")
    } else {
        ("js", "Initialize a new Solid project")
    };
    let caps = Capabilities {
        includes_typescript: ts,
        ..Capabilities::none()
    };

    Bootstrap::scaffold(
        "solid",
        CommandStep::new(
            "Create Solid project",
            ctx.pm.exec(&format!(
                "degit solidjs/templates/{} {}",
                template, ctx.project_name
            )),
        )
        .with_description(description),
        caps,
    )
}

fn tanstack_start(ctx: &PlanContext<'_>) -> Bootstrap {
    Bootstrap::scaffold(
        "tanstack-start",
        CommandStep::new(
            "Create TanStack Start project",
            ctx.pm.exec(&format!("create-tanstack-app@latest {}", ctx.project_name)),
        )
        .with_description("Initialize a new TanStack Start project"),
        Capabilities::typescript(),
    )
}

fn vite_react(ctx: &PlanContext<'_>, id: &'static str, router: &str) -> Bootstrap {
    let ts = ctx.has_typescript();
    let (template, description) = if ts {
        ("react-ts", "Initialize a new React project with Vite and TypeScript")
    } else {
        ("react", "Initialize a new React project with Vite")
    };
    let caps = Capabilities {
        includes_typescript: ts,
        ..Capabilities::none()
    };

    Bootstrap::scaffold(
        id,
        CommandStep::new(
            format!("Create React + Vite project with {}", router),
            ctx.pm.create(&format!(
                "vite@latest {} -- --template {}",
                ctx.project_name, template
            )),
        )
        .with_description(description),
        caps,
    )
}

fn expo(ctx: &PlanContext<'_>) -> Bootstrap {
    Bootstrap::scaffold(
        "expo",
        CommandStep::new(
            "Create Expo project",
            ctx.pm.exec(&format!(
                "create-expo-app@latest {} --template default",
                ctx.project_name
            )),
        )
        .with_description("Initialize a new Expo project"),
        Capabilities::none(),
    )
}

fn hono(ctx: &PlanContext<'_>) -> Bootstrap {
    let mut caps = Capabilities {
        includes_types_node: true,
        ..Capabilities::none()
    };
    caps.subsume("hono");

    Bootstrap::scaffold(
        "hono",
        CommandStep::new(
            "Create Hono project",
            ctx.pm.create(&format!("hono@latest {}", ctx.project_name)),
        )
        .with_description("Initialize a new Hono project"),
        caps,
    )
}

fn elysia(ctx: &PlanContext<'_>) -> Bootstrap {
    let mut caps = Capabilities {
        includes_types_node: true,
        ..Capabilities::none()
    };
    caps.subsume("elysia");

    // Elysia's generator only exists for Bun, whatever the package manager.
    Bootstrap::scaffold(
        "elysia",
        CommandStep::new(
            "Create Elysia project",
            format!("bun create elysia {}", ctx.project_name),
        )
        .with_description("Initialize a new Elysia project (requires Bun)"),
        caps,
    )
}

fn node_server(ctx: &PlanContext<'_>) -> Bootstrap {
    let name = ctx.project_name;
    let command = format!(
        "{} && cd {}/src && {} && cd .. && {}",
        ctx.options.shell.mkdir_all(&[name, "src", "controllers"]),
        name,
        layout::server_subdirs_command(ctx.selection),
        ctx.pm.init_command
    );

    Bootstrap::in_place(
        "node-server",
        CommandStep::new("Initialize Node.js project", command).with_description(
            "Create a new Node.js project directory with recommended structure and initialize package.json",
        ),
    )
}

fn generic(ctx: &PlanContext<'_>) -> Bootstrap {
    let name = ctx.project_name;
    Bootstrap::in_place(
        "generic",
        CommandStep::new(
            "Initialize project",
            format!("mkdir {} && cd {} && {}", name, name, ctx.pm.init_command),
        )
        .with_description("Create a new project directory and initialize package.json"),
    )
}

/// Add-ons `create-tsrouter-app` can install, as (selection token, add-on id).
pub const TANSTACK_ADD_ONS: &[(&str, &str)] = &[
    ("shadcn", "shadcn"),
    ("trpc", "tRPC"),
    ("clerk", "clerk"),
    ("better-auth", "better-auth"),
    ("drizzle", "drizzle"),
    ("prisma", "prisma"),
];

fn tanstack_cli(ctx: &PlanContext<'_>) -> Bootstrap {
    let ts = ctx.has_typescript();
    let mut caps = Capabilities {
        includes_typescript: ts,
        includes_types_node: ts,
        manages_git: true,
        ..Capabilities::none()
    };
    caps.subsume(TANSTACK_CLI);

    let mut args = vec![
        format!("create-tsrouter-app@latest {}", ctx.project_name),
        format!("--template {}", if ts { "file-router" } else { "javascript" }),
    ];

    if ctx.has("tailwindcss") {
        args.push("--tailwind".to_string());
        caps.subsume("tailwindcss");
    }

    let toolchain = ["eslint", "biome"].into_iter().find(|t| ctx.has(t));
    if let Some(toolchain) = toolchain {
        args.push(format!("--toolchain {}", toolchain));
        caps.subsume(toolchain);
    }

    let add_ons: Vec<&str> = TANSTACK_ADD_ONS
        .iter()
        .filter(|(token, _)| ctx.has(token))
        .map(|(token, add_on)| {
            caps.subsume(*token);
            *add_on
        })
        .collect();
    if !add_ons.is_empty() {
        args.push(format!("--add-ons {}", add_ons.join(",")));
    }

    if !ctx.pm.is_npm() {
        args.push(format!("--package-manager {}", ctx.pm.runner));
    }

    if !ctx.has("git-init") {
        args.push("--no-git".to_string());
    }

    let step = CommandStep::new("Create TanStack app", ctx.pm.exec(&args.join(" ")))
        .with_description("Scaffold a TanStack Router app with the selected add-ons and toolchain");

    Bootstrap::scaffold("tanstack", step, caps)
}
