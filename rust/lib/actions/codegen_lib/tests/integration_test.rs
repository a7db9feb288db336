//! Integration test for multi-language action codegen

use std::sync::Arc;

use actions_codegen_lib::*;

const SCHEMA: &str = r#"
  type Mutation {
    InsertUserAction(user_info: UserInfo, something_else: [Int!]): TokenOutput
    Logout(token: String!): Boolean
  }

  input UserInfo {
    username: String!
    password: [String]
    something_else: [Float!]
  }

  type TokenOutput {
    accessToken: String!
  }
"#;

#[test]
fn test_single_action_codegen() {
    let schema = Arc::new(ActionSchema::parse(SCHEMA).unwrap());
    let targets = vec![Target::typescript(), Target::go()];

    let files = generate_action(&schema, "InsertUserAction", &targets).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].path, "InsertUserActionHandler.ts");
    assert_eq!(files[1].path, "InsertUserActionHandler.go");

    let ts = &files[0].content;
    assert!(ts.contains("type Mutation =  {\n  InsertUserAction: TokenOutput\n  Logout: boolean\n}"));
    assert!(ts.contains("type UserInfo =  {\n  username: string\n  password: string[]\n  something_else: number[]\n}"));
    assert!(ts.contains("type InsertUserActionArgs =  {\n  user_info: UserInfo\n  something_else: number[]\n}"));
    assert!(ts.contains("function InsertUserAction(args: InsertUserActionArgs): TokenOutput {"));
    println!("✅ TypeScript handler generated");

    let go = &files[1].content;
    assert!(go.contains("type UserInfo struct {\n  username string\n  password []string\n  something_else []float32\n}"));
    assert!(go.contains("type LogoutArgs struct {\n  token string\n}"));
    assert!(go.contains("func InsertUserAction(args InsertUserActionArgs) TokenOutput {"));
    println!("✅ Go handler generated");
}

#[test]
fn test_all_actions_all_targets() {
    let schema = Arc::new(ActionSchema::parse(SCHEMA).unwrap());
    let targets = vec![Target::typescript(), Target::go(), Target::kotlin()];

    let files = generate(&schema, &[], &targets).unwrap().files;
    let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(
        paths,
        vec![
            "InsertUserActionHandler.ts",
            "InsertUserActionHandler.go",
            "InsertUserActionHandler.kt",
            "LogoutHandler.ts",
            "LogoutHandler.go",
            "LogoutHandler.kt",
        ]
    );

    // Scalar return types go through the profile.
    let logout_go = files.iter().find(|f| f.path == "LogoutHandler.go").unwrap();
    assert!(logout_go.content.contains("func Logout(args LogoutArgs) bool {"));
    let logout_kt = files.iter().find(|f| f.path == "LogoutHandler.kt").unwrap();
    assert!(logout_kt.content.contains("fun Logout(args: LogoutArgs): Boolean {"));

    println!("\nGenerated {} files:", files.len());
    for file in &files {
        println!("  - {}", file.path);
    }
}

#[test]
fn test_custom_target() {
    let schema = Arc::new(ActionSchema::parse(SCHEMA).unwrap());
    let targets = vec![Target::new(
        typescript::TypeScriptProfile,
        |name: &str, ty: &str, args: &[Field], _type_defs: &str| {
            let arg_list: Vec<String> = args.iter().map(|a| format!("{}: {}", a.name, a.ty)).collect();
            format!("{}({}) -> {}", name, arg_list.join(", "), ty)
        },
    )];

    let files = generate(&schema, &["Logout".to_string()], &targets).unwrap().files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].content, "Logout(token: string) -> boolean");
}

#[test]
fn test_unknown_action_skips_only_itself() {
    let schema = Arc::new(ActionSchema::parse(SCHEMA).unwrap());
    let names = vec!["Logout".to_string(), "Missing".to_string(), "InsertUserAction".to_string()];

    let generation = generate(&schema, &names, &[Target::go()]).unwrap();
    let paths: Vec<&str> = generation.files.iter().map(|f| f.path.as_str()).collect();
    assert_eq!(paths, vec!["LogoutHandler.go", "InsertUserActionHandler.go"]);
    assert_eq!(generation.missing, vec!["Missing"]);
    assert!(!generation.is_complete());

    // The single-action call still reports the miss as an error.
    let err = generate_action(&schema, "Missing", &[Target::go()]).unwrap_err();
    assert_eq!(err, CodegenError::ActionNotFound("Missing".into()));
    assert_eq!(err.error_code(), "ACTION_NOT_FOUND");
}

#[test]
fn test_unresolved_reference_aborts_batch() {
    let sdl = "type Mutation { Ping(at: Stamp): Boolean }";
    let schema = Arc::new(ActionSchema::parse(sdl).unwrap());
    let err = generate(&schema, &[], &[Target::typescript()]).unwrap_err();
    assert!(matches!(err, CodegenError::UnresolvedTypeReference { .. }));
}

#[test]
fn test_target_lookup() {
    assert_eq!(Target::by_name("ts").unwrap().language(), "typescript");
    assert_eq!(Target::by_name("go").unwrap().language(), "go");
    assert_eq!(Target::by_name("kotlin").unwrap().profile.file_extension(), "kt");
    assert!(Target::by_name("cobol").is_none());
}

#[test]
fn test_sample_schema_loads() {
    let source = include_str!("../../schema/actions.graphql");
    let schema = Arc::new(ActionSchema::parse(source).unwrap());
    assert_eq!(schema.root(), "Mutation");

    let files = generate(&schema, &[], &[Target::go()]).unwrap().files;
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].path, "InsertUserActionHandler.go");
}
