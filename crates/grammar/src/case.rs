// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! Statement forms of the case language.
//!
//! Several forms share a prefix (`cross ... with ...` with and without `on`,
//! `add column` with and without `values`, the three `load` forms). Forms are
//! tried in a fixed order, longer form first, and every form has to reach the end
//! of its statement to win. A form that stops early therefore never shadows its
//! longer sibling, and a statement that matches no form reports the furthest
//! position any form reached.

use genbil_ir::{Action, Direction, LoadSource, Operator};
use nom::Parser;
use nom::branch::alt;
use nom::combinator::{map, opt, value};
use nom::sequence::{pair, preceded, terminated, tuple};

use crate::error::Failure;
use crate::token::{
    PResult, brace_text, end_of_statement, keyword, quoted_record_sequence, quoted_text,
};

/// `case <form>` followed by the end of the statement
pub(crate) fn statement(input: &str) -> PResult<'_, Action> {
    preceded(
        keyword("case"),
        alt((
            ended(load_file),
            ended(load_query_file),
            ended(load_query_text),
            ended(remove),
            ended(rename),
            ended(move_column),
            ended(filter),
            ended(filter_distinct),
            ended(scope),
            ended(cross_on_column),
            ended(cross_full),
            ended(save),
            ended(copy),
            ended(add_with_default),
            ended(add),
            ended(merge),
        )),
    )(input)
}

fn ended<'a, F>(form: F) -> impl FnMut(&'a str) -> PResult<'a, Action>
where
    F: Parser<&'a str, Action, Failure<'a>>,
{
    terminated(form, end_of_statement)
}

fn load_file(input: &str) -> PResult<'_, Action> {
    map(
        preceded(pair(keyword("load"), keyword("file")), quoted_text),
        |path| Action::Load {
            source: LoadSource::File { path },
        },
    )(input)
}

fn load_query_file(input: &str) -> PResult<'_, Action> {
    map(
        tuple((
            keyword("load"),
            keyword("query"),
            quoted_text,
            keyword("on"),
            quoted_text,
        )),
        |(_, _, path, _, connection_string)| Action::Load {
            source: LoadSource::QueryFile {
                path,
                connection_string,
            },
        },
    )(input)
}

fn load_query_text(input: &str) -> PResult<'_, Action> {
    map(
        tuple((
            keyword("load"),
            keyword("query"),
            brace_text,
            keyword("on"),
            quoted_text,
        )),
        |(_, _, text, _, connection_string)| Action::Load {
            source: LoadSource::QueryText {
                text,
                connection_string,
            },
        },
    )(input)
}

fn remove(input: &str) -> PResult<'_, Action> {
    map(
        preceded(pair(keyword("remove"), keyword("column")), quoted_text),
        |column| Action::Remove { column },
    )(input)
}

fn rename(input: &str) -> PResult<'_, Action> {
    map(
        tuple((
            keyword("rename"),
            keyword("column"),
            quoted_text,
            keyword("into"),
            quoted_text,
        )),
        |(_, _, old, _, new)| Action::Rename { old, new },
    )(input)
}

fn direction(input: &str) -> PResult<'_, Direction> {
    alt((
        value(Direction::Left, keyword("left")),
        value(Direction::Right, keyword("right")),
    ))(input)
}

fn move_column(input: &str) -> PResult<'_, Action> {
    map(
        tuple((
            keyword("move"),
            keyword("column"),
            quoted_text,
            keyword("to"),
            direction,
        )),
        |(_, _, column, _, direction)| Action::Move { column, direction },
    )(input)
}

fn operator(input: &str) -> PResult<'_, Operator> {
    alt((
        value(Operator::Equal, keyword("equal")),
        value(Operator::Like, keyword("like")),
    ))(input)
}

fn filter(input: &str) -> PResult<'_, Action> {
    map(
        tuple((
            keyword("filter"),
            keyword("on"),
            keyword("column"),
            quoted_text,
            keyword("values"),
            opt(keyword("not")),
            operator,
            quoted_record_sequence,
        )),
        |(_, _, _, column, _, not, operator, values)| Action::Filter {
            column,
            operator,
            values,
            negate: not.is_some(),
        },
    )(input)
}

// `filter distinct` without `on` is accepted as well
fn filter_distinct(input: &str) -> PResult<'_, Action> {
    value(
        Action::FilterDistinct,
        tuple((keyword("filter"), opt(keyword("on")), keyword("distinct"))),
    )(input)
}

fn scope(input: &str) -> PResult<'_, Action> {
    map(preceded(keyword("scope"), quoted_text), |name| {
        Action::Scope { name }
    })(input)
}

fn cross_on_column(input: &str) -> PResult<'_, Action> {
    map(
        tuple((
            keyword("cross"),
            quoted_text,
            keyword("with"),
            quoted_text,
            keyword("on"),
            quoted_text,
        )),
        |(_, first, _, second, _, column)| Action::Cross {
            first,
            second,
            join_column: Some(column),
        },
    )(input)
}

fn cross_full(input: &str) -> PResult<'_, Action> {
    map(
        tuple((keyword("cross"), quoted_text, keyword("with"), quoted_text)),
        |(_, first, _, second)| Action::Cross {
            first,
            second,
            join_column: None,
        },
    )(input)
}

fn save(input: &str) -> PResult<'_, Action> {
    map(
        preceded(pair(keyword("save"), keyword("as")), quoted_text),
        |path| Action::Save { path },
    )(input)
}

fn copy(input: &str) -> PResult<'_, Action> {
    map(
        tuple((keyword("copy"), quoted_text, keyword("to"), quoted_text)),
        |(_, from, _, to)| Action::Copy { from, to },
    )(input)
}

fn add_with_default(input: &str) -> PResult<'_, Action> {
    map(
        tuple((
            keyword("add"),
            keyword("column"),
            quoted_text,
            keyword("values"),
            quoted_text,
        )),
        |(_, _, column, _, default)| Action::Add {
            column,
            default: Some(default),
        },
    )(input)
}

fn add(input: &str) -> PResult<'_, Action> {
    map(
        preceded(pair(keyword("add"), keyword("column")), quoted_text),
        |column| Action::Add {
            column,
            default: None,
        },
    )(input)
}

fn merge(input: &str) -> PResult<'_, Action> {
    map(
        preceded(pair(keyword("merge"), keyword("with")), quoted_text),
        |scope| Action::Merge { scope },
    )(input)
}
