// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Interactive menu for building `p` and `q` and combining them remotely.

use polyrpc_client::{ClientError, PolyRpc};
use polyrpc_polynomial::{read_polynomial, Operation, Polynomial, PolynomialError, PolynomialTuple};
use std::io::{self, BufRead, Write};
use strum::{EnumIter, IntoEnumIterator};
use thiserror::Error;
use tracing::debug;

pub const ANSI_CLEAR: &str = "\x1b[H\x1b[2J";

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter)]
pub enum Command {
    SetP,
    SetQ,
    Add,
    Sub,
    Mul,
}

impl Command {
    pub fn key(&self) -> &'static str {
        match self {
            Command::SetP => "1",
            Command::SetQ => "2",
            Command::Add => "3",
            Command::Sub => "4",
            Command::Mul => "5",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Command::SetP => "set p",
            Command::SetQ => "set q",
            Command::Add => "Add(p, q)",
            Command::Sub => "Sub(p, q)",
            Command::Mul => "Mul(p, q)",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::iter().find(|command| command.key() == key)
    }
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Input(#[from] PolynomialError),

    #[error(transparent)]
    Rpc(#[from] ClientError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The two working polynomials. Both start out without terms.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    p: Polynomial,
    q: Polynomial,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn p(&self) -> &Polynomial {
        &self.p
    }

    pub fn q(&self) -> &Polynomial {
        &self.q
    }

    async fn execute<S, R, W>(
        &mut self,
        command: Command,
        service: &S,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), SessionError>
    where
        S: PolyRpc + ?Sized,
        R: BufRead,
        W: Write,
    {
        match command {
            Command::SetP => self.p = prompt_polynomial("p", input, out)?,
            Command::SetQ => self.q = prompt_polynomial("q", input, out)?,
            Command::Add => self.remote(Operation::Add, service, input, out).await?,
            Command::Sub => self.remote(Operation::Sub, service, input, out).await?,
            Command::Mul => self.remote(Operation::Mul, service, input, out).await?,
        }
        Ok(())
    }

    async fn remote<S, R, W>(
        &self,
        operation: Operation,
        service: &S,
        input: &mut R,
        out: &mut W,
    ) -> Result<(), SessionError>
    where
        S: PolyRpc + ?Sized,
        R: BufRead,
        W: Write,
    {
        let polys = PolynomialTuple::pair(self.p.clone(), self.q.clone());
        let result = service.call(operation, polys).await?;
        writeln!(out, "p {} q = [{}]", operation.symbol(), result)?;
        wait_for_return(input, out)?;
        Ok(())
    }
}

/// Ask for a polynomial. The caller only replaces its value on success.
fn prompt_polynomial<R: BufRead, W: Write>(
    name: &str,
    input: &mut R,
    out: &mut W,
) -> Result<Polynomial, PolynomialError> {
    write!(out, "{name}? ")?;
    out.flush()?;
    let polynomial = read_polynomial(input);
    writeln!(out)?;
    if let Ok(polynomial) = &polynomial {
        debug!(coefficients = %polynomial.to_coefficient_line(), "{name} set");
    }
    polynomial
}

fn wait_for_return<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<()> {
    writeln!(out, "press return to continue")?;
    out.flush()?;
    input.read_line(&mut String::new())?;
    Ok(())
}

fn draw_menu<W: Write>(session: &Session, out: &mut W) -> io::Result<()> {
    write!(out, "{ANSI_CLEAR}")?;
    write!(out, "\np = [{}]\nq = [{}]\n\n", session.p, session.q)?;
    for command in Command::iter() {
        writeln!(out, "{}) {}", command.key(), command.label())?;
    }
    Ok(())
}

/// Read menu keys until a known one arrives. `None` means the input is exhausted,
/// including a last key without a terminating newline.
fn read_command<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Command>> {
    loop {
        write!(out, "#? ")?;
        out.flush()?;
        let mut line = String::new();
        let read = input.read_line(&mut line)?;
        writeln!(out)?;

        if read == 0 || !line.ends_with('\n') {
            return Ok(None);
        }

        if let Some(command) = Command::from_key(line.trim()) {
            return Ok(Some(command));
        }
    }
}

/// Run the menu loop until the input is exhausted.
///
/// Bad coefficients and failed remote calls are reported and the loop continues with
/// the previous values. Only I/O failures on the terminal end the session with an error.
pub async fn run<S, R, W>(
    session: &mut Session,
    service: &S,
    input: &mut R,
    out: &mut W,
) -> io::Result<()>
where
    S: PolyRpc + ?Sized,
    R: BufRead,
    W: Write,
{
    loop {
        draw_menu(session, out)?;
        let Some(command) = read_command(input, out)? else {
            return Ok(());
        };

        match session.execute(command, service, input, out).await {
            Ok(()) => {}
            Err(SessionError::Input(PolynomialError::EndOfInput)) => return Ok(()),
            Err(SessionError::Input(PolynomialError::Io(err))) | Err(SessionError::Io(err)) => {
                return Err(err)
            }
            Err(err) => {
                debug!(?command, "{}", err);
                writeln!(out, "failed to {}: {}", command.label(), err)?;
                wait_for_return(input, out)?;
            }
        }
    }
}
