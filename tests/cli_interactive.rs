//! Interactive mode reads selectors from stdin until quit.

mod common;

use common::TestEnv;

const ROOT_MENU: &str = "menucli
1 - Prova
2 - Prova >>
3 - Set visibility <true>
M - Menu
Q - Quit
";

#[test]
fn interactive_renders_menu_and_quits() {
    let env = TestEnv::new();
    let result = env.run_interactive(&[], "1\nq\n");

    assert!(result.success, "stderr:\n{}", result.stderr);
    assert_eq!(
        result.stdout,
        format!("{ROOT_MENU}->Prova 1\n->Bye bye, true believer\n")
    );
}

#[test]
fn interactive_navigation_shows_breadcrumb_and_go_back() {
    let env = TestEnv::new();
    let result = env.run_interactive(&[], "2\nb\nq\n");

    assert!(result.success);
    assert!(result.stdout.contains(
        "->menucli >> Prova\n1 - SubMenu 1\n2 - SubMenu 2\nB - Go Up\nM - Menu\nQ - Quit\n"
    ));
    assert!(result.stdout.contains(&format!("->{ROOT_MENU}")));
}

#[test]
fn toggle_value_is_rendered_live() {
    let env = TestEnv::new();
    let result = env.run_interactive(&[], "3\nm\nq\n");

    assert!(result.success);
    assert!(result.stdout.contains("3 - Set visibility <false>"));
}

#[test]
fn third_blank_line_redisplays_menu() {
    let env = TestEnv::new();
    let result = env.run_interactive(&[], "\n\n\nq\n");

    assert!(result.success);
    assert_eq!(
        result.stdout,
        format!("{ROOT_MENU}->->->{ROOT_MENU}->Bye bye, true believer\n")
    );
}

#[test]
fn end_of_input_ends_session() {
    let env = TestEnv::new();
    let result = env.run_interactive(&[], "1\n");

    assert!(result.success);
    assert!(result.stdout.ends_with("->Prova 1\n->\n"));
}

#[test]
fn unknown_selector_is_not_fatal() {
    let env = TestEnv::new();
    let result = env.run_interactive(&[], "zz\n1\nq\n");

    assert!(result.success);
    assert!(result.stdout.contains("->Command not found\n->Prova 1\n"));
}
