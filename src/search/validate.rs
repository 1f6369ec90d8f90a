use crate::search::{Path, SearchProblem};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("step {step}: action {action} is not applicable in node {node}")]
    NotApplicable {
        step: usize,
        action: String,
        node: String,
    },
    #[error("plan does not reach a goal node, final node is {0}")]
    GoalNotReached(String),
}

/// Replay `actions` from the start node of `problem`, following at each step
/// the first neighbour arc labelled with the action. Returns the resulting
/// path if it ends at a goal node.
pub fn validate<P>(
    problem: &P,
    actions: &[P::Action],
) -> Result<Path<P::Node, P::Action>, ValidationError>
where
    P: SearchProblem,
    P::Action: PartialEq,
{
    let mut path = Path::new(problem.start_node());
    for (step, action) in actions.iter().enumerate() {
        let arc = problem
            .neighbors(path.end())
            .into_iter()
            .find(|arc| arc.action() == action)
            .ok_or_else(|| ValidationError::NotApplicable {
                step,
                action: format!("{:?}", action),
                node: format!("{:?}", path.end()),
            })?;
        path = path.extend(arc);
    }

    if !problem.is_goal(path.end()) {
        return Err(ValidationError::GoalNotReached(format!("{:?}", path.end())));
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;
    use ordered_float::OrderedFloat;

    #[test]
    fn validate_good_plan_ok() {
        let problem = diamond_graph();
        let path = validate(&problem, &["b", "c", "d", "g"]).unwrap();
        assert_eq!(path.cost(), OrderedFloat(5.));
        assert_eq!(path.end(), &"g");
    }

    #[test]
    fn validate_inapplicable_action() {
        let problem = diamond_graph();
        let result = validate(&problem, &["b", "g"]);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::NotApplicable {
                step: 1,
                action: "\"g\"".to_string(),
                node: "\"b\"".to_string(),
            }
        );
    }

    #[test]
    fn validate_plan_stopping_short() {
        let problem = diamond_graph();
        let result = validate(&problem, &["c"]);
        assert!(matches!(result, Err(ValidationError::GoalNotReached(_))));
    }
}
