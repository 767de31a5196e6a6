//! Line parsing and dispatch for the terminal form.
//!
//! Field lists are separated by `|`. Missing fields read as empty, so an
//! incomplete line behaves like pressing a button on a half-filled form:
//! nothing happens.

use std::io::{BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use thiserror::Error;

use almacen_inventory::view::labels;
use almacen_inventory::{InventoryForm, StockDirection, Submission};

pub const HELP: &str = "\
Comandos:
  familia <nombre>                               Agregar Nueva Familia
  material <familia> | <nombre> | <cantidad>     Agregar Nuevo Material
  agregar <familia> | <material> | <cantidad>    Agregar al Stock
  sacar <familia> | <material> | <cantidad>      Sacar del Stock
  materiales <familia>                           Materiales de una familia
  familias                                       Listar familias
  inventario                                     Inventario Actual
  exportar                                       Estado actual en JSON
  ayuda                                          Esta ayuda
  salir                                          Terminar
Los campos se separan con '|'; los nombres no pueden contenerlo.";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ShellError {
    #[error("comando desconocido: '{0}' (escriba 'ayuda')")]
    UnknownCommand(String),

    #[error("el nombre de la familia no puede contener '|': '{0}'")]
    SeparatorInName(String),
}

/// One user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddCategory {
        name: String,
    },
    AddItem {
        category: String,
        name: String,
        quantity: String,
    },
    UpdateStock {
        category: String,
        item: String,
        delta: String,
        direction: StockDirection,
    },
    ListItems {
        category: String,
    },
    ListCategories,
    ShowTable,
    Export,
    Help,
    Quit,
}

/// Whether the loop keeps reading.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

fn fields<const N: usize>(rest: &str) -> [String; N] {
    let mut parts = rest.splitn(N, '|').map(|s| s.trim().to_string());
    core::array::from_fn(|_| parts.next().unwrap_or_default())
}

impl FromStr for Action {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let action = match command.to_lowercase().as_str() {
            "familia" => {
                // '|' separates fields, so such a family could never be referenced.
                if rest.contains('|') {
                    return Err(ShellError::SeparatorInName(rest.to_string()));
                }
                Action::AddCategory {
                    name: rest.to_string(),
                }
            }
            "material" => {
                let [category, name, quantity] = fields::<3>(rest);
                Action::AddItem {
                    category,
                    name,
                    quantity,
                }
            }
            "agregar" | "sacar" => {
                let [category, item, delta] = fields::<3>(rest);
                let direction = if command.eq_ignore_ascii_case("agregar") {
                    StockDirection::Increase
                } else {
                    StockDirection::Decrease
                };
                Action::UpdateStock {
                    category,
                    item,
                    delta,
                    direction,
                }
            }
            "materiales" => Action::ListItems {
                category: rest.to_string(),
            },
            "familias" => Action::ListCategories,
            "inventario" => Action::ShowTable,
            "exportar" => Action::Export,
            "ayuda" => Action::Help,
            "salir" => Action::Quit,
            _ => return Err(ShellError::UnknownCommand(command.to_string())),
        };
        Ok(action)
    }
}

/// Owns the form for the lifetime of the session.
#[derive(Debug, Default)]
pub struct Shell {
    form: InventoryForm,
}

impl Shell {
    pub fn new(form: InventoryForm) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &InventoryForm {
        &self.form
    }

    /// Read lines until EOF or `salir`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", labels::TITLE)?;
        writeln!(out, "Escriba 'ayuda' para ver los comandos.")?;

        for line in input.lines() {
            let line = line.context("failed to read input line")?;
            if line.trim().is_empty() {
                continue;
            }
            match line.parse::<Action>() {
                Ok(action) => {
                    if self.execute(action, out)? == Flow::Exit {
                        break;
                    }
                }
                Err(err) => writeln!(out, "{err}")?,
            }
            out.flush()?;
        }
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, action: Action, out: &mut W) -> anyhow::Result<Flow> {
        match action {
            Action::AddCategory { name } => {
                self.form.set_new_category_name(name);
                if self.form.submit_new_category().is_applied() {
                    self.write_categories(out)?;
                }
            }
            Action::AddItem {
                category,
                name,
                quantity,
            } => {
                self.form.set_item_category(category);
                self.form.set_item_name(name);
                self.form.set_item_quantity(&quantity);
                if self.form.submit_new_item().is_applied() {
                    self.write_table(out)?;
                }
            }
            Action::UpdateStock {
                category,
                item,
                delta,
                direction,
            } => {
                self.form.select_category(category);
                self.form.select_item(item);
                self.form.set_delta(&delta);
                if let Submission::Applied { .. } = self.form.update_stock(direction) {
                    self.write_table(out)?;
                }
            }
            Action::ListItems { category } => {
                self.form.select_category(category);
                for item in self.form.item_options() {
                    writeln!(out, "- {}", item.name())?;
                }
            }
            Action::ListCategories => self.write_categories(out)?,
            Action::ShowTable => self.write_table(out)?,
            Action::Export => {
                let json = serde_json::to_string_pretty(&self.form.state().snapshot())
                    .context("failed to serialize inventory")?;
                writeln!(out, "{json}")?;
            }
            Action::Help => writeln!(out, "{HELP}")?,
            Action::Quit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    fn write_categories<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "Familias:")?;
        for category in self.form.state().categories().iter() {
            writeln!(out, "- {category}")?;
        }
        Ok(())
    }

    fn write_table<W: Write>(&self, out: &mut W) -> anyhow::Result<()> {
        writeln!(out, "{}", labels::CURRENT_STOCK)?;
        writeln!(out, "{}", self.form.table())?;
        Ok(())
    }
}
