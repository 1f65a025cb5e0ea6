//! Dependency aggregation.
//!
//! Packages come from an ordered rule table keyed by selection token. A rule
//! contributes runtime and development packages; its output order is the
//! table order and each list is de-duplicated keeping the first occurrence.

use serde::Serialize;
use tracing::debug;

use crate::bootstrap::Capabilities;
use crate::context::PlanContext;
use crate::step::CommandStep;
use crate::tokens;

/// Packages contributed by a rule.
pub enum Packages {
    None,
    Fixed(&'static [&'static str]),
    /// Computed from the rest of the selection and the bootstrap capabilities.
    Derived(fn(&PlanContext<'_>, &Capabilities) -> Vec<&'static str>),
}

impl Packages {
    fn resolve(&self, ctx: &PlanContext<'_>, caps: &Capabilities) -> Vec<&'static str> {
        match self {
            Self::None => Vec::new(),
            Self::Fixed(packages) => packages.to_vec(),
            Self::Derived(derive) => derive(ctx, caps),
        }
    }
}

/// One entry of the dependency table.
pub struct DependencyRule {
    pub token: &'static str,
    /// The rule is skipped when any of these is selected.
    pub unless: &'static [&'static str],
    pub runtime: Packages,
    pub dev: Packages,
}

impl DependencyRule {
    const fn runtime(token: &'static str, packages: &'static [&'static str]) -> Self {
        Self {
            token,
            unless: &[],
            runtime: Packages::Fixed(packages),
            dev: Packages::None,
        }
    }

    const fn dev(token: &'static str, packages: &'static [&'static str]) -> Self {
        Self {
            token,
            unless: &[],
            runtime: Packages::None,
            dev: Packages::Fixed(packages),
        }
    }

    const fn both(
        token: &'static str,
        runtime: &'static [&'static str],
        dev: &'static [&'static str],
    ) -> Self {
        Self {
            token,
            unless: &[],
            runtime: Packages::Fixed(runtime),
            dev: Packages::Fixed(dev),
        }
    }

    fn applies(&self, ctx: &PlanContext<'_>, caps: &Capabilities) -> bool {
        ctx.has(self.token) && !ctx.has_any(self.unless) && !caps.subsumes(self.token)
    }
}

/// Dependency table in output order.
pub static RULES: &[DependencyRule] = &[
    DependencyRule {
        token: "tanstack-router",
        unless: &["tanstack-start"],
        runtime: Packages::Fixed(&["@tanstack/react-router"]),
        dev: Packages::Fixed(&["@tanstack/router-plugin"]),
    },
    DependencyRule::runtime("react-router", &["react-router-dom"]),
    DependencyRule::runtime("hono", &["hono"]),
    DependencyRule {
        token: "express",
        unless: &[],
        runtime: Packages::Fixed(&["express"]),
        dev: Packages::Derived(express_types),
    },
    DependencyRule::runtime("fastify", &["fastify"]),
    DependencyRule::runtime(
        "trpc",
        &["@trpc/server", "@trpc/client", "@trpc/react-query", "@tanstack/react-query"],
    ),
    DependencyRule::runtime(
        "orpc",
        &["@orpc/server", "@orpc/client", "@orpc/react-query", "@tanstack/react-query"],
    ),
    DependencyRule {
        token: "drizzle",
        unless: &[],
        runtime: Packages::Derived(drizzle_runtime),
        dev: Packages::Fixed(&["drizzle-kit"]),
    },
    DependencyRule::both("prisma", &["@prisma/client"], &["prisma"]),
    DependencyRule::runtime("mongoose", &["mongoose"]),
    DependencyRule::runtime("better-auth", &["better-auth"]),
    DependencyRule {
        token: "clerk",
        unless: &[],
        runtime: Packages::Derived(clerk_sdk),
        dev: Packages::None,
    },
    DependencyRule::runtime("authjs", &["next-auth"]),
    DependencyRule::runtime("lucia", &["lucia", "@lucia-auth/adapter-drizzle"]),
    DependencyRule::runtime("shadcn", &["class-variance-authority", "clsx", "tailwind-merge"]),
    DependencyRule::runtime("heroui", &["@heroui/react", "framer-motion"]),
    DependencyRule::runtime("radix", &["@radix-ui/themes"]),
    DependencyRule::runtime("ark-ui", &["@ark-ui/react"]),
    DependencyRule::runtime("stripe", &["stripe", "@stripe/stripe-js"]),
    DependencyRule::runtime("polar", &["@polar-sh/nextjs"]),
    DependencyRule::runtime("zod", &["zod"]),
    DependencyRule::runtime("valibot", &["valibot"]),
    DependencyRule {
        token: "typescript",
        unless: &[],
        runtime: Packages::None,
        dev: Packages::Derived(typescript_tooling),
    },
    DependencyRule::dev("tailwindcss", &["tailwindcss", "@tailwindcss/vite"]),
    DependencyRule::dev("biome", &["@biomejs/biome"]),
    DependencyRule::dev("eslint", &["eslint", "@eslint/js", "typescript-eslint"]),
    DependencyRule {
        token: "prettier",
        unless: &[],
        runtime: Packages::None,
        dev: Packages::Derived(prettier),
    },
    DependencyRule::dev("husky", &["husky", "lint-staged"]),
    DependencyRule::dev("lefthook", &["lefthook"]),
    DependencyRule::runtime("dotenv", &["dotenv"]),
    DependencyRule::runtime("ai-sdk", &["ai", "@ai-sdk/openai"]),
    DependencyRule::both("expo-uniwind", &["nativewind"], &["tailwindcss"]),
    DependencyRule::runtime("expo-unistyles", &["react-native-unistyles"]),
];

fn express_types(ctx: &PlanContext<'_>, _: &Capabilities) -> Vec<&'static str> {
    if ctx.has_typescript() {
        vec!["@types/express"]
    } else {
        Vec::new()
    }
}

/// `drizzle-orm` plus the driver for the selected database or host.
fn drizzle_runtime(ctx: &PlanContext<'_>, _: &Capabilities) -> Vec<&'static str> {
    let driver = if ctx.has_any(&["postgresql", "neon"]) {
        Some("@neondatabase/serverless")
    } else if ctx.has_any(&["sqlite", "turso"]) {
        Some("@libsql/client")
    } else if ctx.has_any(&["mysql", "planetscale"]) {
        Some("@planetscale/database")
    } else {
        None
    };

    std::iter::once("drizzle-orm").chain(driver).collect()
}

/// Clerk ships one SDK per host framework.
fn clerk_sdk(ctx: &PlanContext<'_>, _: &Capabilities) -> Vec<&'static str> {
    if ctx.has("nextjs") {
        vec!["@clerk/nextjs"]
    } else if ctx.has_any(tokens::ROUTERS) {
        vec!["@clerk/clerk-react"]
    } else if ctx.is_react_native() {
        vec!["@clerk/clerk-expo"]
    } else {
        debug!("No Clerk SDK for the selected frontend");
        Vec::new()
    }
}

fn typescript_tooling(ctx: &PlanContext<'_>, caps: &Capabilities) -> Vec<&'static str> {
    let mut packages = Vec::new();
    if !caps.includes_typescript {
        packages.push("typescript");
    }
    if !caps.includes_types_node && !ctx.is_react_native() {
        packages.push("@types/node");
    }
    // only standalone servers execute TypeScript directly
    if ctx.has_backend() {
        packages.extend(["tsx", "tsc-alias"]);
    }
    packages
}

fn prettier(ctx: &PlanContext<'_>, _: &Capabilities) -> Vec<&'static str> {
    let mut packages = vec!["prettier"];
    if tokens::uses_tailwind(ctx.selection) {
        packages.push("prettier-plugin-tailwindcss");
    }
    packages
}

/// Aggregated package lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Dependencies {
    pub runtime: Vec<&'static str>,
    pub dev: Vec<&'static str>,
}

impl Dependencies {
    pub fn is_empty(&self) -> bool {
        self.runtime.is_empty() && self.dev.is_empty()
    }

    pub fn contains(&self, package: &str) -> bool {
        self.runtime.iter().chain(&self.dev).any(|p| *p == package)
    }

    fn push_unique(list: &mut Vec<&'static str>, packages: Vec<&'static str>) {
        for package in packages {
            if !list.contains(&package) {
                list.push(package);
            }
        }
    }
}

/// Evaluate the dependency table against a selection.
pub fn aggregate_dependencies(ctx: &PlanContext<'_>, caps: &Capabilities) -> Dependencies {
    let mut deps = Dependencies::default();

    for rule in RULES {
        if !rule.applies(ctx, caps) {
            continue;
        }
        Dependencies::push_unique(&mut deps.runtime, rule.runtime.resolve(ctx, caps));
        Dependencies::push_unique(&mut deps.dev, rule.dev.resolve(ctx, caps));
    }

    debug!(
        "Aggregated {} runtime and {} dev packages",
        deps.runtime.len(),
        deps.dev.len()
    );
    deps
}

/// Install steps for the aggregated lists, runtime first. Empty lists emit nothing.
pub fn install_steps(ctx: &PlanContext<'_>, deps: &Dependencies) -> Vec<CommandStep> {
    let mut steps = Vec::with_capacity(2);

    if !deps.runtime.is_empty() {
        steps.push(
            CommandStep::new("Install dependencies", ctx.pm.add(&deps.runtime))
                .with_description("Install project dependencies"),
        );
    }

    if !deps.dev.is_empty() {
        steps.push(
            CommandStep::new("Install dev dependencies", ctx.pm.add_dev(&deps.dev))
                .with_description("Install additional development dependencies not included by the framework"),
        );
    }

    steps
}
