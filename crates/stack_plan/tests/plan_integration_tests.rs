//! Integration tests for plan generation.

use stack_catalog::{CatalogLoader, Selection};
use stack_plan::{
    generate_plan, select_single_command, validate, validate_messages, CommandStep, Layout,
    PlanGenerator, PlanOptions, PlanProfile, ShellFlavor,
};

fn selection(tokens: &[&str]) -> Selection {
    tokens.iter().copied().collect()
}

fn step<'a>(steps: &'a [CommandStep], label: &str) -> Option<&'a CommandStep> {
    steps.iter().find(|s| s.label == label)
}

fn dev_install(steps: &[CommandStep]) -> String {
    step(steps, "Install dev dependencies")
        .map(|s| s.command.clone())
        .unwrap_or_default()
}

#[test]
fn test_next_typescript_installs_no_typescript_tooling() {
    let steps = generate_plan("my-app", &selection(&["nextjs", "typescript"]));

    assert_eq!(
        steps[0].command,
        "npx create-next-app@latest my-app --typescript --no-tailwind --no-eslint"
    );
    assert!(step(&steps, "Install dev dependencies").is_none());
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1].command, "cd my-app");
}

#[test]
fn test_express_typescript_dev_dependencies() {
    let steps = generate_plan("api", &selection(&["express", "typescript"]));
    let dev = dev_install(&steps);

    for package in ["typescript", "@types/node", "tsx", "tsc-alias", "@types/express"] {
        assert!(dev.split(' ').any(|p| p == package), "missing {package} in {dev}");
    }
    assert!(step(&steps, "Navigate to project").is_none());
    assert!(step(&steps, "Initialize TypeScript").is_some());
}

#[test]
fn test_monorepo_has_one_server_step_and_no_navigate() {
    let steps = generate_plan("shop", &selection(&["nextjs", "express"]));

    let server_steps = steps
        .iter()
        .filter(|s| s.label == "Create server folder structure")
        .count();
    assert_eq!(server_steps, 1);
    assert!(step(&steps, "Navigate to project").is_none());
}

#[test]
fn test_generic_fallback_for_empty_selection() {
    let steps = generate_plan("", &Selection::new());
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].command, "mkdir my-app && cd my-app && npm init -y");
    assert_eq!(
        select_single_command("", &Selection::new()),
        "mkdir my-app && cd my-app && npm init -y"
    );
}

#[test]
fn test_package_manager_threads_through_every_step() {
    let steps = generate_plan(
        "web",
        &selection(&["react-router", "typescript", "zod", "biome", "husky", "pnpm"]),
    );

    assert_eq!(steps[0].command, "pnpm create vite@latest web -- --template react-ts");
    assert_eq!(step(&steps, "Install dependencies").unwrap().command, "pnpm add react-router-dom zod");
    assert!(dev_install(&steps).starts_with("pnpm add -D "));
    assert_eq!(step(&steps, "Initialize Biome").unwrap().command, "pnpm exec biome init");
    assert_eq!(step(&steps, "Initialize Husky").unwrap().command, "pnpm exec husky init");
    assert!(steps
        .iter()
        .all(|s| !s.command.contains("npx") && !s.command.starts_with("npm ")));
}

#[test]
fn test_validator_examples() {
    assert_eq!(validate(&selection(&["biome", "eslint"])).len(), 1);
    assert!(validate(&Selection::new()).is_empty());

    let messages = validate_messages(&selection(&["drizzle", "prisma"]));
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("drizzle, prisma"));
}

#[test]
fn test_validator_does_not_block_generation() {
    let conflicting = selection(&["biome", "eslint", "drizzle", "prisma", "husky", "lefthook"]);
    assert!(!validate(&conflicting).is_empty());
    assert!(!generate_plan("x", &conflicting).is_empty());
}

#[test]
fn test_windows_shell_only_changes_directory_creation() {
    let tokens = selection(&["fastify", "mongoose", "typescript"]);
    let posix = PlanGenerator::default().steps("srv", &tokens);
    let windows = PlanGenerator::new(PlanOptions::new().shell(ShellFlavor::Windows)).steps("srv", &tokens);

    assert_eq!(posix.len(), windows.len());
    assert!(posix[0].command.starts_with("mkdir -p srv/src/controllers && "));
    assert!(windows[0].command.starts_with("mkdir srv\\src\\controllers && "));
    assert_eq!(posix[1..], windows[1..]);
}

#[test]
fn test_delegated_tanstack_plan() {
    let generator = PlanGenerator::new(PlanOptions::new().profile(PlanProfile::Delegated));
    let plan = generator.generate(
        "board",
        &selection(&["tanstack", "typescript", "tailwindcss", "eslint", "trpc", "git-init", "hono"]),
    );

    assert_eq!(plan.bootstrap, "tanstack");
    assert_eq!(plan.layout, Layout::Monorepo);
    assert_eq!(
        plan.steps[0].command,
        "npx create-tsrouter-app@latest board --template file-router --tailwind --toolchain eslint --add-ons tRPC"
    );
    assert_eq!(plan.steps[1].label, "Create server folder structure");
    assert!(plan.steps.iter().all(|s| s.label != "Initialize Git"));
    assert!(!plan.dependencies.contains("@trpc/server"));
    assert!(!plan.dependencies.contains("eslint"));
    assert!(plan.dependencies.contains("hono"));
}

#[test]
fn test_per_step_ignores_tanstack_token() {
    let steps = generate_plan("board", &selection(&["tanstack", "typescript"]));
    assert_eq!(steps[0].label, "Initialize project");
}

#[test]
fn test_every_builtin_preset_generates_a_plan() {
    let catalog = CatalogLoader::builtin().unwrap();
    let generator = PlanGenerator::default();

    for preset in &catalog.presets {
        let plan = generator.generate(&preset.slug(), &preset.selection());
        assert!(!plan.steps.is_empty(), "preset {} produced no steps", preset.id);
        assert_eq!(
            plan.primary_command(),
            Some(generator.single_command(&preset.slug(), &preset.selection()).as_str())
        );
    }
}

#[test]
fn test_every_dependency_rule_in_isolation() {
    // rules that contribute nothing on their own
    let empty_alone = ["hono", "clerk"];

    for rule in stack_plan::dependencies::RULES {
        let plan = PlanGenerator::default().generate("app", &selection(&[rule.token]));
        if empty_alone.contains(&rule.token) {
            assert!(plan.dependencies.is_empty(), "{} alone should add nothing", rule.token);
        } else {
            assert!(!plan.dependencies.is_empty(), "{} alone added nothing", rule.token);
        }
    }
}

#[test]
fn test_every_conflicting_pair() {
    let pairs = [
        ("biome", "eslint", "conflicting-linters"),
        ("drizzle", "prisma", "multiple-orms"),
        ("drizzle", "mongoose", "multiple-orms"),
        ("prisma", "mongoose", "multiple-orms"),
        ("husky", "lefthook", "multiple-hook-managers"),
        ("tanstack-router", "react-router", "multiple-routers"),
    ];

    for (a, b, rule) in pairs {
        let warnings = validate(&selection(&[a, b]));
        assert_eq!(warnings.len(), 1, "{a} + {b}");
        assert_eq!(warnings[0].rule, rule);
        assert!(validate(&selection(&[a])).is_empty());
    }
}

#[test]
fn test_none_choices_and_unknown_tokens_are_inert() {
    let catalog = CatalogLoader::builtin().unwrap();
    let mut inert: Vec<String> = catalog
        .categories
        .iter()
        .flat_map(|c| c.technologies.iter())
        .filter(|t| t.is_none_choice())
        .map(|t| t.id.clone())
        .collect();
    assert!(!inert.is_empty());
    inert.push("quantum-bundler".to_string());

    let generators = [
        PlanGenerator::default(),
        PlanGenerator::new(PlanOptions::new().profile(PlanProfile::Delegated)),
    ];
    let bases = [
        vec!["zod"],
        vec!["nextjs", "typescript", "drizzle", "postgresql"],
        vec!["express", "mongoose", "typescript", "husky"],
        vec![],
    ];

    for base in &bases {
        let plain = selection(base);
        let mut padded = plain.clone();
        for token in &inert {
            padded.insert(token.as_str());
        }

        for generator in &generators {
            let expected = generator.generate("app", &plain);
            let actual = generator.generate("app", &padded);
            assert_eq!(actual, expected, "{base:?}");
            assert_eq!(actual.dependencies, expected.dependencies);
        }
        assert_eq!(generate_plan("app", &padded), generate_plan("app", &plain));
        assert_eq!(validate(&padded), validate(&plain), "{base:?}");
    }
}
