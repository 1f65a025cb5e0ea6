//! Post-install tool initialization.

use tracing::debug;

use crate::bootstrap::Capabilities;
use crate::context::PlanContext;
use crate::step::CommandStep;

/// One tool-initialization entry, in emission order.
struct InitTool {
    token: &'static str,
    label: &'static str,
    description: &'static str,
    /// Extra condition beyond the token being selected.
    when: fn(&PlanContext<'_>) -> bool,
    command: fn(&PlanContext<'_>) -> String,
}

fn always(_: &PlanContext<'_>) -> bool {
    true
}

static INIT_TOOLS: &[InitTool] = &[
    InitTool {
        token: "shadcn",
        label: "Initialize shadcn/ui",
        description: "Set up shadcn/ui components",
        when: always,
        command: |ctx| ctx.pm.exec("shadcn@latest init"),
    },
    InitTool {
        token: "typescript",
        label: "Initialize TypeScript",
        description: "Generate tsconfig.json",
        when: |ctx| ctx.has_backend(),
        command: |ctx| ctx.pm.exec("tsc --init"),
    },
    InitTool {
        token: "prisma",
        label: "Initialize Prisma",
        description: "Set up Prisma ORM",
        when: always,
        command: |ctx| ctx.pm.exec("prisma init"),
    },
    InitTool {
        token: "biome",
        label: "Initialize Biome",
        description: "Set up Biome configuration",
        when: always,
        command: |ctx| {
            if ctx.pm.is_npm() {
                ctx.pm.exec("@biomejs/biome init")
            } else {
                ctx.pm.exec("biome init")
            }
        },
    },
    InitTool {
        token: "husky",
        label: "Initialize Husky",
        description: "Set up Git hooks with Husky",
        when: always,
        command: |ctx| ctx.pm.exec("husky init"),
    },
    InitTool {
        token: "lefthook",
        label: "Initialize Lefthook",
        description: "Set up Git hooks with Lefthook",
        // one hook manager owns .git/hooks
        when: |ctx| !ctx.has("husky"),
        command: |ctx| ctx.pm.exec("lefthook install"),
    },
    InitTool {
        token: "git-init",
        label: "Initialize Git",
        description: "Initialize Git repository",
        when: always,
        command: |_| "git init".to_string(),
    },
];

/// Initialization steps for the selected tools, skipping whatever the
/// bootstrap already set up.
pub fn sequence_init(ctx: &PlanContext<'_>, caps: &Capabilities) -> Vec<CommandStep> {
    INIT_TOOLS
        .iter()
        .filter(|tool| ctx.has(tool.token) && (tool.when)(ctx))
        .filter(|tool| {
            let skipped = caps.subsumes(tool.token) || (tool.token == "git-init" && caps.manages_git);
            if skipped {
                debug!("Skipping {} initialization, handled by bootstrap", tool.token);
            }
            !skipped
        })
        .map(|tool| CommandStep::new(tool.label, (tool.command)(ctx)).with_description(tool.description))
        .collect()
}
