//! Interactive menu
//!
//! The numbered text menu that runs when `contas` is started without a
//! subcommand. Reads one trimmed line per prompt; end of input leaves the
//! loop as if option 8 had been chosen.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::config::Settings;
use crate::display::format_bill_table;
use crate::error::ContasResult;
use crate::models::{parse_amount, Bill, BillField, BillPatch};
use crate::reports::{render_monthly_pdf, CategorySummary, MonthlyReport, RenderOutcome};
use crate::services::{BillService, CreateBillInput, SearchCriteria};
use crate::storage::Storage;

const MENU: &str = "\n=== Gerenciador de Contas ===
1. Criar Conta
2. Listar Contas
3. Atualizar Conta
4. Deletar Conta
5. Gerar Relatório em PDF
6. Buscar Contas
7. Resumo por Categoria
8. Sair
";

const CREATE_PROMPTS: [&str; 9] = [
    "Tipo (débito/crédito): ",
    "Descrição: ",
    "Valor: ",
    "Data de Vencimento (DD/MM/AAAA): ",
    "Data de Recebimento (opcional): ",
    "Categoria (moradia, alimentação, lazer, outros): ",
    "Status (pago/pendente): ",
    "Prioridade: ",
    "Comentários (opcional): ",
];

const UPDATE_PROMPTS: [&str; 9] = [
    "Novo Tipo: ",
    "Nova Descrição: ",
    "Novo Valor: ",
    "Nova Data de Vencimento: ",
    "Nova Data de Recebimento: ",
    "Nova Categoria: ",
    "Novo Status: ",
    "Nova Prioridade: ",
    "Novos Comentários: ",
];

const SEARCH_PROMPTS: [&str; 3] = [
    "Tipo (débito/crédito ou deixe em branco): ",
    "Categoria (ou deixe em branco): ",
    "Status (pago/pendente ou deixe em branco): ",
];

/// Whether the menu loop keeps going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Interactive menu over any line-oriented input and output
pub struct Shell<'a, R, W> {
    storage: &'a Storage,
    settings: &'a Settings,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(storage: &'a Storage, settings: &'a Settings, input: R, output: W) -> Self {
        Self {
            storage,
            settings,
            input,
            output,
        }
    }

    /// Run the menu until option 8 or end of input
    ///
    /// Errors from an individual option are printed and the loop continues;
    /// only failures to read input or write output end the loop with an error.
    pub fn run(&mut self) -> ContasResult<()> {
        loop {
            write!(self.output, "{}", MENU)?;

            let Some(choice) = self.prompt("Escolha uma opção: ")? else {
                writeln!(self.output)?;
                break;
            };
            debug!(choice = %choice, "menu option");

            let result = match choice.as_str() {
                "1" => self.create_bill(),
                "2" => self.list_bills(),
                "3" => self.update_bill(),
                "4" => self.delete_bill(),
                "5" => self.render_report(),
                "6" => self.search_bills(),
                "7" => self.category_summary(),
                "8" => {
                    writeln!(self.output, "Saindo do sistema. Até logo!")?;
                    break;
                }
                _ => {
                    writeln!(self.output, "Opção inválida. Tente novamente.")?;
                    Ok(Flow::Continue)
                }
            };

            match result {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => {
                    writeln!(self.output)?;
                    break;
                }
                Err(e) => writeln!(self.output, "Erro: {}", e)?,
            }
        }

        self.output.flush()?;
        Ok(())
    }

    fn create_bill(&mut self) -> ContasResult<Flow> {
        let Some(values) = self.prompt_all(&CREATE_PROMPTS)? else {
            return Ok(Flow::Quit);
        };
        let [
            tipo,
            descricao,
            valor,
            data_vencimento,
            data_recebimento,
            categoria,
            status,
            prioridade,
            comentarios,
        ] = values;

        if parse_amount(&valor).is_err() {
            writeln!(self.output, "Valor inválido.")?;
            return Ok(Flow::Continue);
        }

        BillService::new(self.storage).create(CreateBillInput {
            tipo,
            descricao,
            valor,
            data_vencimento,
            data_recebimento,
            categoria,
            status,
            prioridade,
            comentarios,
        })?;
        writeln!(self.output, "Conta criada com sucesso!")?;
        Ok(Flow::Continue)
    }

    fn list_bills(&mut self) -> ContasResult<Flow> {
        let bills = BillService::new(self.storage).list()?;
        if bills.is_empty() {
            writeln!(self.output, "Nenhuma conta cadastrada.")?;
        } else {
            write!(self.output, "{}", format_bill_table(&bills))?;
        }
        Ok(Flow::Continue)
    }

    /// Print the current bills; false when there are none
    fn show_current(&mut self) -> ContasResult<bool> {
        let bills: Vec<Bill> = BillService::new(self.storage).list()?;
        if bills.is_empty() {
            writeln!(self.output, "Nenhuma conta cadastrada.")?;
            return Ok(false);
        }
        writeln!(self.output, "\n=== Contas atuais ===")?;
        write!(self.output, "{}", format_bill_table(&bills))?;
        Ok(true)
    }

    fn update_bill(&mut self) -> ContasResult<Flow> {
        if !self.show_current()? {
            return Ok(Flow::Continue);
        }

        let Some(descricao) = self.prompt("Descrição da conta a atualizar: ")? else {
            return Ok(Flow::Quit);
        };
        writeln!(self.output, "(deixe em branco para manter o valor atual)")?;
        let Some(values) = self.prompt_all(&UPDATE_PROMPTS)? else {
            return Ok(Flow::Quit);
        };

        let mut patch = BillPatch::new();
        for (field, value) in BillField::ALL.into_iter().zip(values) {
            patch.set(field, value);
        }

        if BillService::new(self.storage).update(&descricao, &patch)? {
            writeln!(self.output, "Conta atualizada!")?;
        } else {
            writeln!(self.output, "Conta não encontrada.")?;
        }
        Ok(Flow::Continue)
    }

    fn delete_bill(&mut self) -> ContasResult<Flow> {
        if !self.show_current()? {
            return Ok(Flow::Continue);
        }

        let Some(descricao) = self.prompt("Descrição da conta a deletar: ")? else {
            return Ok(Flow::Quit);
        };

        if BillService::new(self.storage).delete(&descricao)? {
            writeln!(self.output, "Conta deletada!")?;
        } else {
            writeln!(self.output, "Conta não encontrada.")?;
        }
        Ok(Flow::Continue)
    }

    fn render_report(&mut self) -> ContasResult<Flow> {
        let report = MonthlyReport::generate(self.storage)?;
        let path = self.storage.paths().report_file(self.settings);

        match render_monthly_pdf(&report, &path, &self.settings.currency_symbol)? {
            RenderOutcome::Written(path) => {
                writeln!(self.output, "Relatório salvo em {}", path.display())?
            }
            RenderOutcome::Empty => writeln!(self.output, "Nenhuma conta para gerar relatório.")?,
        }
        Ok(Flow::Continue)
    }

    fn search_bills(&mut self) -> ContasResult<Flow> {
        writeln!(self.output, "\n=== Busca de Contas ===")?;
        let Some([tipo, categoria, status]) = self.prompt_all(&SEARCH_PROMPTS)? else {
            return Ok(Flow::Quit);
        };

        let criteria = SearchCriteria::new()
            .with(BillField::Tipo, tipo)
            .with(BillField::Categoria, categoria)
            .with(BillField::Status, status);

        let bills = BillService::new(self.storage).search(&criteria)?;
        if bills.is_empty() {
            writeln!(self.output, "Nenhuma conta encontrada.")?;
        } else {
            write!(self.output, "{}", format_bill_table(&bills))?;
        }
        Ok(Flow::Continue)
    }

    fn category_summary(&mut self) -> ContasResult<Flow> {
        writeln!(self.output, "\n=== Resumo Financeiro por Categoria ===")?;
        let summary = CategorySummary::generate(self.storage)?;
        write!(
            self.output,
            "{}",
            summary.format_terminal(&self.settings.currency_symbol)
        )?;
        Ok(Flow::Continue)
    }

    /// Print a prompt and read one trimmed line; `None` at end of input
    fn prompt(&mut self, prompt: &str) -> ContasResult<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_all<const N: usize>(
        &mut self,
        prompts: &[&str; N],
    ) -> ContasResult<Option<[String; N]>> {
        let mut values: [String; N] = std::array::from_fn(|_| String::new());
        for (value, prompt) in values.iter_mut().zip(prompts) {
            match self.prompt(prompt)? {
                Some(line) => *value = line,
                None => return Ok(None),
            }
        }
        Ok(Some(values))
    }
}
