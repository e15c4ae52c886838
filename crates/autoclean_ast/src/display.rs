//! Source-like pretty printer for the arena tree.
//!
//! Output is Java-flavoured and indented with two spaces. Every statement is
//! braced so rewritten trees read unambiguously:
//!
//! ```text
//! void main() {
//!   @cleanup("release") Handle handle = open();
//!   try {
//!     use(handle);
//!   } finally {
//!     if (autoclean.Runtime.preventNullAnalysis(handle) != null) {
//!       handle.release();
//!     }
//!   }
//! }
//! ```

use autoclean_type::symbol::SymbolTable;

use crate::{
  ASTNode, NodeId,
  attribute::{ASTAttribute, ASTAttributeArg},
  expressions::ASTExpression,
  metadata::ASTMetadata,
  statements::{ASTStatement, variable::ASTVariable},
  tree::SyntaxTree,
  type_::ASTTypeSyntax,
};

const INDENT: &str = "  ";

pub struct TreeFormatter<'a> {
  tree: &'a SyntaxTree,
  symbols: &'a SymbolTable,
}

/// Format every root of `tree`, separated by a blank line.
pub fn format_tree(
  tree: &SyntaxTree,
  symbols: &SymbolTable,
) -> String {
  let formatter = TreeFormatter::new(tree, symbols);
  tree
    .roots()
    .iter()
    .map(|root| formatter.format_node(root))
    .collect::<Vec<_>>()
    .join("\n\n")
}

impl<'a> TreeFormatter<'a> {
  pub fn new(
    tree: &'a SyntaxTree,
    symbols: &'a SymbolTable,
  ) -> Self {
    Self { tree, symbols }
  }

  pub fn format_node(
    &self,
    id: &NodeId,
  ) -> String {
    match self.tree.get(id) {
      ASTNode::Expression(_) => self.format_expression(id),
      ASTNode::Attribute(attr) => self.format_attribute(attr),
      ASTNode::Statement(_) => self.lines(id, 0).join("\n"),
    }
  }

  fn name(
    &self,
    id: &autoclean_type::symbol::SymbolId,
  ) -> &str {
    self.symbols.get(id)
  }

  fn pad(depth: usize) -> String {
    INDENT.repeat(depth)
  }

  fn format_type(
    &self,
    ty: &ASTTypeSyntax,
  ) -> String {
    match ty {
      ASTTypeSyntax::Void => "void".to_string(),
      ASTTypeSyntax::Inferred => "var".to_string(),
      ASTTypeSyntax::Named(name) => self.name(name).to_string(),
    }
  }

  fn format_modifiers(metadata: &ASTMetadata) -> String {
    metadata.keywords().iter().map(|k| format!("{} ", k)).collect()
  }

  fn format_attribute(
    &self,
    attr: &ASTAttribute,
  ) -> String {
    if attr.args.is_empty() {
      return format!("@{}", self.name(&attr.name));
    }

    let args: Vec<String> = attr
      .args
      .iter()
      .map(|arg| match arg {
        ASTAttributeArg::IntLiteral(value, _) => value.to_string(),
        ASTAttributeArg::StringLiteral(value, _) => format!("{:?}", value),
      })
      .collect();

    format!("@{}({})", self.name(&attr.name), args.join(", "))
  }

  /// Declaration text without the trailing semicolon.
  fn format_declaration(
    &self,
    var: &ASTVariable,
  ) -> String {
    let mut out = String::new();

    for attr_id in &var.attributes {
      if let ASTNode::Attribute(attr) = self.tree.get(attr_id) {
        out.push_str(&self.format_attribute(attr));
        out.push(' ');
      }
    }

    out.push_str(&Self::format_modifiers(&var.metadata));
    out.push_str(&self.format_type(&var.type_));
    out.push(' ');
    out.push_str(self.name(&var.name));

    if let Some(value) = &var.value {
      out.push_str(" = ");
      out.push_str(&self.format_expression(value));
    }

    out
  }

  /// Inline form used in `for (...)` headers and catch clauses.
  fn format_inline(
    &self,
    id: &NodeId,
  ) -> String {
    match self.tree.get(id) {
      ASTNode::Statement(ASTStatement::Variable(var)) => self.format_declaration(var),
      ASTNode::Statement(ASTStatement::Expression(stmt)) => self.format_expression(&stmt.expression),
      ASTNode::Expression(_) => self.format_expression(id),
      _ => self.lines(id, 0).join(" "),
    }
  }

  pub fn format_expression(
    &self,
    id: &NodeId,
  ) -> String {
    let ASTNode::Expression(expr) = self.tree.get(id) else {
      return self.format_inline(id);
    };

    match expr {
      ASTExpression::Assignment(assign) => format!(
        "{} {} {}",
        self.format_expression(&assign.target),
        assign.operator.as_str(),
        self.format_expression(&assign.value)
      ),
      ASTExpression::Binary(binary) => format!(
        "{} {} {}",
        self.format_expression(&binary.left),
        binary.operator.as_str(),
        self.format_expression(&binary.right)
      ),
      ASTExpression::Cast(cast) => {
        format!("({}) {}", self.format_type(&cast.target_type), self.format_expression(&cast.expression))
      },
      ASTExpression::Call(call) => {
        let args: Vec<String> = call.arguments.iter().map(|arg| self.format_expression(arg)).collect();
        format!("{}({})", self.format_expression(&call.callee), args.join(", "))
      },
      ASTExpression::Grouped(grouped) => format!("({})", self.format_expression(&grouped.expression)),
      ASTExpression::Literal(literal) => literal.value.to_string(),
      ASTExpression::MemberAccess(access) => {
        format!("{}.{}", self.format_expression(&access.object), self.name(&access.member))
      },
      ASTExpression::Unary(unary) => format!("{}{}", unary.operator.as_str(), self.format_expression(&unary.operand)),
      ASTExpression::Variable(var) => self.name(&var.name).to_string(),
    }
  }

  /// `{ ... }` around `id`. The opening brace is the first line, unindented,
  /// so callers can append it to a header.
  fn braced(
    &self,
    id: &NodeId,
    depth: usize,
  ) -> Vec<String> {
    let mut lines = vec!["{".to_string()];

    match self.tree.get(id) {
      ASTNode::Statement(ASTStatement::Block(block)) => {
        for stmt in &block.statements {
          lines.extend(self.lines(stmt, depth + 1));
        }
      },
      _ => lines.extend(self.lines(id, depth + 1)),
    }

    lines.push(format!("{}}}", Self::pad(depth)));
    lines
  }

  /// Joins `head` onto the first line of `tail`.
  fn attach(
    head: String,
    mut tail: Vec<String>,
  ) -> Vec<String> {
    if tail.is_empty() {
      return vec![head];
    }

    tail[0] = format!("{}{}", head, tail[0]);
    tail
  }

  /// Appends `suffix_lines` after the closing brace on the last line of `lines`.
  fn continue_after(
    lines: &mut Vec<String>,
    keyword: &str,
    suffix_lines: Vec<String>,
  ) {
    let last = lines.pop().unwrap_or_default();
    lines.extend(Self::attach(format!("{} {} ", last, keyword), suffix_lines));
  }

  fn lines(
    &self,
    id: &NodeId,
    depth: usize,
  ) -> Vec<String> {
    let pad = Self::pad(depth);

    let stmt = match self.tree.get(id) {
      ASTNode::Statement(stmt) => stmt,
      ASTNode::Expression(_) => return vec![format!("{}{};", pad, self.format_expression(id))],
      ASTNode::Attribute(attr) => return vec![format!("{}{}", pad, self.format_attribute(attr))],
    };

    match stmt {
      ASTStatement::Expression(expr) => vec![format!("{}{};", pad, self.format_expression(&expr.expression))],
      ASTStatement::Variable(var) => vec![format!("{}{};", pad, self.format_declaration(var))],
      ASTStatement::Return(ret) => match &ret.expression {
        Some(value) => vec![format!("{}return {};", pad, self.format_expression(value))],
        None => vec![format!("{}return;", pad)],
      },
      ASTStatement::Block(_) => Self::attach(pad.clone(), self.braced(id, depth)),
      ASTStatement::Function(func) => {
        let params: Vec<String> = func.parameters.iter().map(|p| self.format_inline(p)).collect();
        let head = format!(
          "{}{}{} {}({})",
          pad,
          Self::format_modifiers(&func.metadata),
          self.format_type(&func.return_type),
          self.name(&func.name),
          params.join(", ")
        );

        match &func.body {
          None => vec![format!("{};", head)],
          Some(body) => {
            let mut lines = vec![format!("{} {{", head)];
            for stmt in body {
              lines.extend(self.lines(stmt, depth + 1));
            }
            lines.push(format!("{}}}", pad));
            lines
          },
        }
      },
      ASTStatement::Record(record) => {
        let mut lines = vec![format!("{}record {} {{", pad, self.name(&record.name))];
        for item in &record.items {
          lines.extend(self.lines(item, depth + 1));
        }
        lines.push(format!("{}}}", pad));
        lines
      },
      ASTStatement::If(stmt) => {
        let head = format!("{}if ({}) ", pad, self.format_expression(&stmt.condition));
        let mut lines = Self::attach(head, self.braced(&stmt.then_branch, depth));

        if let Some(else_branch) = &stmt.else_branch {
          let else_lines = match self.tree.get(else_branch) {
            ASTNode::Statement(ASTStatement::If(_)) => {
              let mut nested = self.lines(else_branch, depth);
              nested[0] = nested[0].trim_start().to_string();
              nested
            },
            _ => self.braced(else_branch, depth),
          };
          Self::continue_after(&mut lines, "else", else_lines);
        }

        lines
      },
      ASTStatement::While(stmt) => {
        let head = format!("{}while ({}) ", pad, self.format_expression(&stmt.condition));
        Self::attach(head, self.braced(&stmt.body, depth))
      },
      ASTStatement::For(stmt) => {
        let part = |slot: &Option<NodeId>| slot.as_ref().map(|id| self.format_inline(id)).unwrap_or_default();
        let head = format!(
          "{}for ({}; {}; {}) ",
          pad,
          part(&stmt.init),
          part(&stmt.condition),
          part(&stmt.update)
        );
        Self::attach(head, self.braced(&stmt.body, depth))
      },
      ASTStatement::Switch(switch) => {
        let mut lines = vec![format!("{}switch ({}) {{", pad, self.format_expression(&switch.selector))];
        for case in &switch.cases {
          lines.extend(self.lines(case, depth + 1));
        }
        lines.push(format!("{}}}", pad));
        lines
      },
      ASTStatement::Case(case) => {
        let label = match &case.label {
          Some(label) => format!("{}case {}:", pad, self.format_expression(label)),
          None => format!("{}default:", pad),
        };
        let mut lines = vec![label];
        for stmt in &case.statements {
          lines.extend(self.lines(stmt, depth + 1));
        }
        lines
      },
      ASTStatement::Try(stmt) => {
        let mut lines = Self::attach(format!("{}try ", pad), self.braced(&stmt.body, depth));

        for catch_id in &stmt.catches {
          if let ASTNode::Statement(ASTStatement::Catch(catch)) = self.tree.get(catch_id) {
            let clause = Self::attach(
              format!("({}) ", self.format_inline(&catch.parameter)),
              self.braced(&catch.body, depth),
            );
            Self::continue_after(&mut lines, "catch", clause);
          }
        }

        if let Some(finalizer) = &stmt.finalizer {
          Self::continue_after(&mut lines, "finally", self.braced(finalizer, depth));
        }

        lines
      },
      ASTStatement::Catch(catch) => {
        let head = format!("{}catch ({}) ", pad, self.format_inline(&catch.parameter));
        Self::attach(head, self.braced(&catch.body, depth))
      },
    }
  }
}

#[cfg(test)]
mod tests {
  use autoclean_type::{BytePosition, Store, file::FileId, span::Span};

  use super::*;
  use crate::{
    expressions::{
      call::ASTCallExpression,
      literal::{ASTLiteral, ASTLiteralValue},
      variable::ASTVariableExpression,
    },
    statements::{
      block::ASTBlock,
      expression_statement::ASTExpressionStatement,
      if_statement::ASTIf,
      switch_statement::{ASTCase, ASTSwitch},
      try_statement::{ASTCatch, ASTTry},
    },
  };

  struct Builder {
    nodes: Store<ASTNode>,
    symbols: SymbolTable,
    offset: u32,
  }

  impl Builder {
    fn new() -> Self {
      Self {
        nodes: Store::new(),
        symbols: SymbolTable::new(),
        offset: 0,
      }
    }

    fn span(&mut self) -> Span {
      self.offset += 1;
      Span::new(FileId::new(0), BytePosition(self.offset), BytePosition(self.offset + 1))
    }

    fn ident(
      &mut self,
      name: &str,
    ) -> NodeId {
      let name = self.symbols.intern(name);
      let span = self.span();
      self.nodes.alloc(ASTNode::Expression(ASTExpression::Variable(ASTVariableExpression::new(name, span))))
    }

    fn call_stmt(
      &mut self,
      callee: &str,
      arg: &str,
    ) -> NodeId {
      let callee = self.ident(callee);
      let arg = self.ident(arg);
      let span = self.span();
      let call = self.nodes.alloc(ASTNode::Expression(ASTExpression::Call(ASTCallExpression::new(
        callee,
        vec![arg],
        span.clone(),
      ))));
      self
        .nodes
        .alloc(ASTNode::Statement(ASTStatement::Expression(ASTExpressionStatement::new(call, span))))
    }

    fn block(
      &mut self,
      statements: Vec<NodeId>,
    ) -> NodeId {
      let span = self.span();
      self.nodes.alloc(ASTNode::Statement(ASTStatement::Block(ASTBlock::new(statements, span))))
    }
  }

  #[test]
  fn formats_if_else_chain() {
    let mut b = Builder::new();
    let cond = b.ident("ready");
    let then_call = b.call_stmt("start", "job");
    let then_block = b.block(vec![then_call]);
    let else_call = b.call_stmt("skip", "job");
    let span = b.span();
    let stmt = b.nodes.alloc(ASTNode::Statement(ASTStatement::If(ASTIf::new(
      cond,
      then_block,
      Some(else_call),
      span,
    ))));

    let tree = SyntaxTree::new(b.nodes, vec![stmt]);
    let text = format_tree(&tree, &b.symbols);

    assert_eq!(text, "if (ready) {\n  start(job);\n} else {\n  skip(job);\n}");
  }

  #[test]
  fn formats_try_catch_finally() {
    let mut b = Builder::new();
    let body_call = b.call_stmt("read", "file");
    let body = b.block(vec![body_call]);

    let name = b.symbols.intern("e");
    let ty = b.symbols.intern("IOException");
    let span = b.span();
    let param = b.nodes.alloc(ASTNode::Statement(ASTStatement::Variable(ASTVariable::new(
      name,
      ASTTypeSyntax::Named(ty),
      None,
      vec![],
      ASTMetadata::NONE,
      span,
    ))));
    let catch_call = b.call_stmt("log", "e");
    let catch_body = b.block(vec![catch_call]);
    let span = b.span();
    let catch = b.nodes.alloc(ASTNode::Statement(ASTStatement::Catch(ASTCatch::new(param, catch_body, span))));

    let null = b.span();
    let null = b.nodes.alloc(ASTNode::Expression(ASTExpression::Literal(ASTLiteral::new(
      ASTLiteralValue::Null,
      null,
    ))));
    let span = b.span();
    let fin_stmt = b.nodes.alloc(ASTNode::Statement(ASTStatement::Expression(ASTExpressionStatement::new(
      null, span,
    ))));
    let finalizer = b.block(vec![fin_stmt]);

    let span = b.span();
    let stmt = b.nodes.alloc(ASTNode::Statement(ASTStatement::Try(ASTTry::new(
      body,
      vec![catch],
      Some(finalizer),
      span,
    ))));

    let tree = SyntaxTree::new(b.nodes, vec![stmt]);
    let text = format_tree(&tree, &b.symbols);

    assert_eq!(
      text,
      "try {\n  read(file);\n} catch (IOException e) {\n  log(e);\n} finally {\n  null;\n}"
    );
  }

  #[test]
  fn formats_switch_arms() {
    let mut b = Builder::new();
    let selector = b.ident("mode");
    let span = b.span();
    let one = b.nodes.alloc(ASTNode::Expression(ASTExpression::Literal(ASTLiteral::new(
      ASTLiteralValue::Int(1),
      span,
    ))));
    let run = b.call_stmt("run", "job");
    let span = b.span();
    let first = b.nodes.alloc(ASTNode::Statement(ASTStatement::Case(ASTCase::new(Some(one), vec![run], span))));
    let stop = b.call_stmt("stop", "job");
    let span = b.span();
    let fallback = b.nodes.alloc(ASTNode::Statement(ASTStatement::Case(ASTCase::new(None, vec![stop], span))));
    let span = b.span();
    let switch = b.nodes.alloc(ASTNode::Statement(ASTStatement::Switch(ASTSwitch::new(
      selector,
      vec![first, fallback],
      span,
    ))));

    let tree = SyntaxTree::new(b.nodes, vec![switch]);

    insta::assert_snapshot!(format_tree(&tree, &b.symbols), @r"
    switch (mode) {
      case 1:
        run(job);
      default:
        stop(job);
    }
    ");
  }
}
