use crate::{
    ast::Node,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Reduces an arithmetic tree to a scalar.
    ///
    /// A `BinaryOp` reduces its left operand, then its right operand, and
    /// applies the operator. Every other node is handed to
    /// [`Context::reduce_value`]. Since the parser builds strictly
    /// left-leaning chains, `2 + 3 * 4` is `(2 + 3) * 4`.
    ///
    /// # Errors
    /// Any `RuntimeError` raised by the operands or the operator.
    ///
    /// # Example
    /// ```
    /// use cfglang::{
    ///     ast::{BinaryOperator, Node},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut context = Context::new();
    /// let sum = Node::BinaryOp { left:  Box::new(Node::literal(Value::Integer(2), 1)),
    ///                            op:    BinaryOperator::Add,
    ///                            right: Box::new(Node::literal(Value::Integer(3), 1)),
    ///                            line:  1, };
    /// let product = Node::BinaryOp { left:  Box::new(sum),
    ///                                op:    BinaryOperator::Mul,
    ///                                right: Box::new(Node::literal(Value::Integer(4), 1)),
    ///                                line:  1, };
    ///
    /// assert_eq!(context.reduce_expr(&product).unwrap(), Value::Integer(20));
    /// ```
    pub fn reduce_expr(&mut self, node: &Node) -> EvalResult<Value> {
        match node {
            Node::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = self.reduce_expr(left)?;
                let right = self.reduce_expr(right)?;
                Self::eval_scalar_op(*op, &left, &right, *line)
            },
            _ => self.reduce_value(node),
        }
    }
}
