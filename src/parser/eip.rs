// src/parser/eip.rs
//! Vocabulary of the Java route DSL: which fluent calls are route steps and
//! how they nest.

/// Calls that become route steps without opening a nesting level.
const LEAVES: &[&str] = &[
    "to", "toD", "toF", "log", "setBody", "setHeader", "setProperty", "removeHeader",
    "removeHeaders", "removeProperty", "removeProperties", "transform", "process", "bean",
    "marshal", "unmarshal", "convertBodyTo", "recipientList", "routingSlip", "dynamicRouter",
    "wireTap", "enrich", "pollEnrich", "delay", "throttle", "throwException", "stop",
    "rollback", "markRollbackOnly", "validate", "script", "sort", "inOnly", "inOut",
    "setExchangePattern", "claimCheck", "sample", "kamelet", "serviceCall", "setFaultBody",
];

/// Calls that become route steps and take the following steps as children.
const BLOCKS: &[&str] = &[
    "choice", "filter", "split", "aggregate", "loop", "loopDoWhile", "multicast", "doTry",
    "idempotentConsumer", "loadBalance", "resequence", "threads", "transacted",
    "circuitBreaker", "pipeline", "step", "saga", "policy", "onCompletion",
];

/// Branch steps and the block each one belongs to.
const BRANCHES: &[(&str, &str)] = &[
    ("when", "choice"),
    ("otherwise", "choice"),
    ("doCatch", "doTry"),
    ("doFinally", "doTry"),
    ("onFallback", "circuitBreaker"),
];

/// Role of one fluent call in the route DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    /// `routeId("...")`.
    RouteId,
    Leaf,
    Block,
    /// Opens a branch inside the named owner block.
    Branch { owner: &'static str },
    /// `end()` / `endParent()`: closes the innermost block.
    End,
    /// `endChoice()` / `endDoTry()`: returns to the named owner block.
    EndBranch { owner: &'static str },
    /// Options and expression helpers that are not steps.
    Other,
}

#[must_use]
pub fn classify(name: &str) -> Call {
    match name {
        "routeId" => return Call::RouteId,
        "end" | "endParent" | "endCircuitBreaker" => return Call::End,
        "endChoice" => return Call::EndBranch { owner: "choice" },
        "endDoTry" => return Call::EndBranch { owner: "doTry" },
        _ => {}
    }
    if let Some((_, owner)) = BRANCHES.iter().find(|(branch, _)| *branch == name) {
        return Call::Branch { owner: *owner };
    }
    if BLOCKS.contains(&name) {
        return Call::Block;
    }
    if LEAVES.contains(&name) {
        return Call::Leaf;
    }
    Call::Other
}

#[must_use]
pub fn is_branch(name: &str) -> bool {
    BRANCHES.iter().any(|(branch, _)| *branch == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_vocabulary() {
        assert_eq!(classify("to"), Call::Leaf);
        assert_eq!(classify("choice"), Call::Block);
        assert_eq!(classify("when"), Call::Branch { owner: "choice" });
        assert_eq!(classify("doFinally"), Call::Branch { owner: "doTry" });
        assert_eq!(classify("endChoice"), Call::EndBranch { owner: "choice" });
        assert_eq!(classify("end"), Call::End);
        assert_eq!(classify("routeId"), Call::RouteId);
        assert_eq!(classify("streaming"), Call::Other);
        assert!(is_branch("otherwise"));
        assert!(!is_branch("choice"));
    }
}
