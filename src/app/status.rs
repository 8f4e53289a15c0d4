use crate::persona::PersonaDefinition;

pub fn render_definition(definition: &PersonaDefinition) -> String {
    let mut lines = vec![String::from("◆ Persona definition"), String::new()];

    lines.push(String::from("Constraints:"));
    for constraint in definition.constraints() {
        lines.push(format!("  {:<20} {}", constraint.id(), constraint.class()));
    }

    lines.push(String::from("Repairs:"));
    for repair in definition.repairs() {
        lines.push(format!("  {}", repair.id()));
    }

    lines.push(String::from("Memory schema:"));
    for category in definition.memory_schema() {
        let marker = if category == definition.commit_category() {
            " (commit)"
        } else {
            ""
        };
        lines.push(format!("  {category}{marker}"));
    }

    lines.join("\n") + "\n"
}
